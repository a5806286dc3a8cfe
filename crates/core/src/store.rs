//! In-memory recipe collections.

use tracing::debug;

use crate::models::Recipe;

/// Ordered collection of recipes, looked up by name with linear scans.
///
/// Duplicates are allowed; lookups and removals act on the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

/// The recipes a user has picked to shop for.
pub type MealPlan = RecipeStore;

impl RecipeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe without checking for duplicates.
    pub fn add(&mut self, recipe: Recipe) {
        debug!(recipe = recipe.name(), "adding recipe");
        self.recipes.push(recipe);
    }

    /// First recipe whose name equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.find_by(|recipe| recipe.name() == name)
    }

    /// First recipe matching `predicate`.
    pub fn find_by(&self, predicate: impl FnMut(&&Recipe) -> bool) -> Option<&Recipe> {
        self.recipes.iter().find(predicate)
    }

    /// Remove the first recipe named exactly `name`. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Recipe> {
        self.remove_by(|recipe| recipe.name() == name)
    }

    /// Remove the first recipe matching `predicate`, returning it.
    pub fn remove_by(&mut self, predicate: impl FnMut(&Recipe) -> bool) -> Option<Recipe> {
        let index = self.recipes.iter().position(predicate)?;
        let removed = self.recipes.remove(index);
        debug!(recipe = removed.name(), "removed recipe");
        Some(removed)
    }

    /// Recipes in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Number of stored recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for RecipeStore {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecipeStore {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
