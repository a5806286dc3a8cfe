//! Command grammar for the interactive prompt.

use grocery_core::{error::ParseError, ingredient::parse_amount};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static REMOVE_INGREDIENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rm\s+-i\s+(?P<name>.+?)\s+(?P<amount>\S+)$")
        .expect("failed to compile ingredient removal regex")
});

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank line.
    Empty,
    Help,
    Quit,
    /// Interactively create a recipe and add it to the cook book.
    MakeRecipe,
    /// Add a cook book recipe (sanitised name) to the meal plan.
    AddRecipe(String),
    /// Remove a recipe (sanitised name) from the meal plan.
    RemoveRecipe(String),
    /// Take an amount of an ingredient off the shopping list.
    RemoveIngredient { name: String, amount: f64 },
    ListMealPlan,
    ListCookBook,
    ListShopping,
    Generate,
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("usage: rm -i <ingredient name> <amount>")]
    RemoveIngredientUsage,
    #[error(transparent)]
    Amount(#[from] ParseError),
}

impl Command {
    /// Parse one line of input.
    ///
    /// Single-letter commands and `ls` variants match the raw words; `add`
    /// and `rm` take their recipe name from the sanitised line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let raw = words.join(" ");
        let sanitised = sanitise_command(line);
        let verb = sanitised.split(' ').next().unwrap_or_default();

        let command = match raw.as_str() {
            "" => Self::Empty,
            "H" | "h" => Self::Help,
            "Q" | "q" => Self::Quit,
            "mkrec" => Self::MakeRecipe,
            "g" | "G" => Self::Generate,
            "ls" => Self::ListMealPlan,
            "ls -a" => Self::ListCookBook,
            "ls -s" => Self::ListShopping,
            _ if words.len() >= 2 && words[0] == "rm" && words[1] == "-i" => {
                return parse_remove_ingredient(&raw);
            }
            _ if verb == "add" => Self::AddRecipe(argument(&sanitised, "add")),
            _ if verb == "rm" => Self::RemoveRecipe(argument(&sanitised, "rm")),
            _ => Self::Unknown(raw),
        };
        Ok(command)
    }
}

fn argument(sanitised: &str, verb: &str) -> String {
    sanitised[verb.len()..].trim_start().to_string()
}

fn parse_remove_ingredient(raw: &str) -> Result<Command, CommandError> {
    let captures = REMOVE_INGREDIENT_RE
        .captures(raw)
        .ok_or(CommandError::RemoveIngredientUsage)?;
    let amount = parse_amount(&captures["amount"])?;
    Ok(Command::RemoveIngredient {
        name: captures["name"].to_string(),
        amount,
    })
}

/// Lower-case, drop everything but letters and whitespace, and collapse
/// whitespace runs to single spaces.
pub fn sanitise_command(command: &str) -> String {
    let kept: String = command
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_alphabetic() || ch.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
