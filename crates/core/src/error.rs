//! Error types for ingredient and recipe parsing.

use thiserror::Error;

/// Failure to turn a raw ingredient line into an [`IngredientEntry`](crate::models::IngredientEntry).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The line does not carry an amount, a measure and a name.
    #[error("ingredient '{line}' needs an amount, a measure and a name")]
    MissingTokens {
        /// Offending input line.
        line: String,
    },
    /// The amount token is not a finite number.
    #[error("'{token}' is not a valid amount")]
    InvalidAmount {
        /// Offending amount token.
        token: String,
    },
    /// The amount parsed but is zero or negative.
    #[error("amount '{token}' must be greater than zero")]
    NonPositiveAmount {
        /// Offending amount token.
        token: String,
    },
}

/// Failure to build a [`Recipe`](crate::models::Recipe).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    /// Recipe names must contain at least one visible character.
    #[error("recipe name cannot be empty")]
    EmptyName,
    /// One of the ingredient lines failed to parse.
    #[error("invalid ingredient line '{line}': {source}")]
    Ingredient {
        /// Line that failed to parse.
        line: String,
        /// Underlying parse failure.
        #[source]
        source: ParseError,
    },
}
