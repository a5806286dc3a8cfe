//! Shopping list aggregation.
//!
//! Entries are keyed by ingredient name only. When two entries share a name
//! their amounts are summed and the measure already on the list wins; no
//! unit conversion is attempted.

use tracing::debug;

use crate::{models::IngredientEntry, store::RecipeStore};

/// Ingredients unique by name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    entries: Vec<IngredientEntry>,
}

impl ShoppingList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate every ingredient of every recipe, in recipe then ingredient order.
    pub fn generate(recipes: &RecipeStore) -> Self {
        let mut list = Self::new();
        for recipe in recipes {
            for entry in recipe.ingredients() {
                list.add(entry.clone());
            }
        }
        debug!(
            recipes = recipes.len(),
            entries = list.len(),
            "generated shopping list"
        );
        list
    }

    /// Add an entry, summing into an existing entry of the same name.
    ///
    /// The existing entry keeps its measure; a new name is appended as-is.
    pub fn add(&mut self, entry: IngredientEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.name == entry.name)
        {
            Some(existing) => existing.amount += entry.amount,
            None => self.entries.push(entry),
        }
    }

    /// Subtract `amount` from the entry named `name`.
    ///
    /// The entry is dropped once nothing is left (a result of exactly zero
    /// counts as nothing). Returns the remaining amount, or `None` when the
    /// entry was removed or never existed.
    pub fn remove(&mut self, name: &str, amount: f64) -> Option<f64> {
        let index = self.entries.iter().position(|entry| entry.name == name)?;
        let remaining = self.entries[index].amount - amount;
        if remaining <= 0.0 {
            self.entries.remove(index);
            debug!(ingredient = name, "dropped ingredient from shopping list");
            None
        } else {
            self.entries[index].amount = remaining;
            Some(remaining)
        }
    }

    /// Entry for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&IngredientEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[IngredientEntry] {
        &self.entries
    }

    /// Number of distinct ingredients.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no ingredients.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<IngredientEntry>> for ShoppingList {
    fn from(entries: Vec<IngredientEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.add(entry);
        }
        list
    }
}
