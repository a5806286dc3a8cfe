//! Ingredient line parsing.

use crate::{error::ParseError, models::IngredientEntry};

/// Parse `"<amount> <measure> <name...>"` into an [`IngredientEntry`].
///
/// Tokens are whitespace separated; everything after the measure is joined
/// back with single spaces to form the name.
///
/// ```
/// use grocery_core::ingredient::parse_ingredient;
///
/// let entry = parse_ingredient("0.5 tsp coffee granules").unwrap();
/// assert_eq!(entry.amount, 0.5);
/// assert_eq!(entry.measure, "tsp");
/// assert_eq!(entry.name, "coffee granules");
/// ```
pub fn parse_ingredient(line: &str) -> Result<IngredientEntry, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::MissingTokens {
            line: line.to_string(),
        });
    }

    let amount = parse_amount(tokens[0])?;
    Ok(IngredientEntry::new(amount, tokens[1], tokens[2..].join(" ")))
}

/// Parse a positive, finite amount token.
pub fn parse_amount(token: &str) -> Result<f64, ParseError> {
    let amount = token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidAmount {
            token: token.to_string(),
        })?;
    if amount <= 0.0 {
        return Err(ParseError::NonPositiveAmount {
            token: token.to_string(),
        });
    }
    Ok(amount)
}
