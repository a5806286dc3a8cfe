//! Aligned text rendering of ingredient lists.

use std::io::{self, Write};

use crate::models::IngredientEntry;

/// Render an amount the way a float prints by default: whole numbers keep a
/// single decimal (`1.0`), everything else uses the shortest round-trip form.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e16 {
        format!("{amount:.1}")
    } else {
        format!("{amount}")
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Widths {
    amount: usize,
    measure: usize,
    name: usize,
}

impl Widths {
    fn of(entries: &[IngredientEntry]) -> Self {
        entries.iter().fold(Self::default(), |widths, entry| Self {
            amount: widths.amount.max(format_amount(entry.amount).chars().count()),
            measure: widths.measure.max(entry.measure.chars().count()),
            name: widths.name.max(entry.name.chars().count()),
        })
    }
}

/// Render one `| amount | measure | name |` row per entry.
///
/// Amounts are right aligned, names left aligned, and measures centred with
/// the odd space going to the right.
pub fn render_ingredients(entries: &[IngredientEntry]) -> Vec<String> {
    let widths = Widths::of(entries);
    entries
        .iter()
        .map(|entry| render_row(entry, widths))
        .collect()
}

fn render_row(entry: &IngredientEntry, widths: Widths) -> String {
    let amount = format_amount(entry.amount);
    let amount_len = amount.chars().count();
    let measure_len = entry.measure.chars().count();
    let name_len = entry.name.chars().count();

    let amount_pad = widths.amount + 1 - amount_len;
    let slack = widths.measure - measure_len;
    let left_pad = slack / 2 + slack % 2;
    let right_pad = (slack + 1) / 2 + (slack + 1) % 2;
    let name_pad = widths.name - name_len + 1;

    format!(
        "|{:amount_pad$}{amount} | {:left_pad$}{measure}{:right_pad$} | {name}{:name_pad$} |",
        "",
        "",
        "",
        "",
        measure = entry.measure,
        name = entry.name,
    )
}

/// Write the rendered rows to `out`, one per line.
pub fn display_ingredients(entries: &[IngredientEntry], out: &mut impl Write) -> io::Result<()> {
    for line in render_ingredients(entries) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amounts_like_floats() {
        assert_eq!(format_amount(1.0), "1.0");
        assert_eq!(format_amount(300.0), "300.0");
        assert_eq!(format_amount(0.5), "0.5");
        assert_eq!(format_amount(0.125), "0.125");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn pads_and_centres_columns() {
        let rows = render_ingredients(&[
            IngredientEntry::new(1.0, "large", "banana"),
            IngredientEntry::new(0.5, "cup", "ice"),
        ]);
        assert_eq!(
            rows,
            vec![
                "| 1.0 | large  | banana  |".to_string(),
                "| 0.5 |  cup   | ice     |".to_string(),
            ]
        );
    }

    #[test]
    fn right_aligns_wider_amounts() {
        let rows = render_ingredients(&[
            IngredientEntry::new(300.0, "g", "peanuts"),
            IngredientEntry::new(0.5, "tsp", "salt"),
        ]);
        assert_eq!(
            rows,
            vec![
                "| 300.0 |  g   | peanuts  |".to_string(),
                "|   0.5 | tsp  | salt     |".to_string(),
            ]
        );
    }

    #[test]
    fn writes_one_line_per_entry() {
        let mut out = Vec::new();
        display_ingredients(&[IngredientEntry::new(2.0, "tsp", "oil")], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "| 2.0 | tsp  | oil  |\n");
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render_ingredients(&[]).is_empty());
    }
}
