//! Shared domain models.

use crate::{error::RecipeError, ingredient::parse_ingredient};

/// A quantity of a named ingredient.
///
/// The measure is an opaque unit token; it is carried along but never
/// converted or reconciled.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientEntry {
    /// Positive quantity.
    pub amount: f64,
    /// Unit token such as `g`, `tsp` or `large`.
    pub measure: String,
    /// Ingredient name, used as the aggregation key.
    pub name: String,
}

impl IngredientEntry {
    /// Build an entry from its parts.
    pub fn new(amount: f64, measure: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            amount,
            measure: measure.into(),
            name: name.into(),
        }
    }
}

/// A named recipe with its ingredients in the order they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    name: String,
    ingredients: Vec<IngredientEntry>,
}

impl Recipe {
    /// Build a recipe from raw ingredient lines, parsing each one.
    pub fn new<I, S>(name: impl Into<String>, lines: I) -> Result<Self, RecipeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecipeError::EmptyName);
        }

        let ingredients = lines
            .into_iter()
            .map(|line| {
                let line = line.as_ref();
                parse_ingredient(line).map_err(|source| RecipeError::Ingredient {
                    line: line.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { name, ingredients })
    }

    /// Recipe name as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed ingredients in their original order.
    pub fn ingredients(&self) -> &[IngredientEntry] {
        &self.ingredients
    }

    /// Amount and measure of the first ingredient named exactly `ingredient`.
    pub fn ingredient_amount(&self, ingredient: &str) -> Option<(f64, &str)> {
        self.ingredients
            .iter()
            .find(|entry| entry.name == ingredient)
            .map(|entry| (entry.amount, entry.measure.as_str()))
    }

    /// Ingredients rendered back as `"<amount> <measure> <name>"` lines.
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}",
                    crate::display::format_amount(entry.amount),
                    entry.measure,
                    entry.name
                )
            })
            .collect()
    }
}
