#![warn(clippy::all, missing_docs)]

//! Core domain logic for the grocery helper.
//!
//! This crate hosts the recipe and ingredient models, the in-memory cook
//! book, shopping list aggregation and rendering, and configuration used
//! by the command-line frontend.

pub mod config;
pub mod cook_book;
pub mod display;
pub mod error;
pub mod ingredient;
pub mod models;
pub mod shopping;
pub mod store;

pub use crate::config::AppConfig;
pub use error::{ParseError, RecipeError};
pub use models::{IngredientEntry, Recipe};
pub use shopping::ShoppingList;
pub use store::{MealPlan, RecipeStore};
