use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use grocery_core::{
    display::display_ingredients, ingredient::parse_ingredient, MealPlan, Recipe, RecipeStore,
    ShoppingList,
};
use tracing::{debug, info, warn};

use crate::command::{sanitise_command, Command};

const COMMAND_PROMPT: &str = "Please enter a command: ";
const RECIPE_NAME_PROMPT: &str = "Please enter the recipe name: ";
const INGREDIENT_PROMPT: &str = "Please enter an ingredient: ";

const NO_MEAL_PLAN: &str = "No recipe in meal plan yet.";
const NO_SHOPPING_LIST: &str = "No shopping list generated yet. Use the g command first.";

const HELP_TEXT: &str = "\
H or h: Help
mkrec: create a recipe and add it to the cook book
add {recipe}: add a recipe from the cook book to the meal plan
rm {recipe}: remove a recipe from the meal plan
rm -i {ingredient name} {amount}: remove an amount of an ingredient from the shopping list
ls: list all recipes in the meal plan
ls -a: list all recipes in the cook book
ls -s: display the shopping list
g or G: generate the shopping list from the meal plan
Q or q: Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// State of one interactive session.
#[derive(Debug)]
pub struct Session {
    cook_book: RecipeStore,
    meal_plan: MealPlan,
    shopping_list: Option<ShoppingList>,
}

impl Session {
    pub fn new(cook_book: RecipeStore) -> Self {
        Self {
            cook_book,
            meal_plan: MealPlan::new(),
            shopping_list: None,
        }
    }

    pub fn meal_plan(&self) -> &MealPlan {
        &self.meal_plan
    }

    /// Last generated shopping list, if `g` has been issued.
    pub fn shopping_list(&self) -> Option<&ShoppingList> {
        self.shopping_list.as_ref()
    }

    /// Prompt for commands until `q` or end of input.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        info!(recipes = self.cook_book.len(), "session started");
        while let Some(line) = prompt(input, out, COMMAND_PROMPT)? {
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    warn!(input = %line, "rejected command: {err}");
                    writeln!(out, "Error: {err}")?;
                    continue;
                }
            };

            debug!(?command, "dispatching");
            if self.execute(command, input, out)? == Flow::Quit {
                break;
            }
        }
        info!("session ended");
        Ok(())
    }

    fn execute(
        &mut self,
        command: Command,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<Flow> {
        match command {
            Command::Empty => {}
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::MakeRecipe => self.make_recipe(input, out)?,
            Command::AddRecipe(name) => self.add_to_meal_plan(&name, out)?,
            Command::RemoveRecipe(name) => {
                if let Some(recipe) = self
                    .meal_plan
                    .remove_by(|recipe| sanitise_command(recipe.name()) == name)
                {
                    info!(recipe = recipe.name(), "removed from meal plan");
                }
            }
            Command::RemoveIngredient { name, amount } => match self.shopping_list.as_mut() {
                Some(list) => {
                    let remaining = list.remove(&name, amount);
                    info!(ingredient = %name, amount, ?remaining, "removed from shopping list");
                }
                None => writeln!(out, "{NO_SHOPPING_LIST}")?,
            },
            Command::ListMealPlan => self.list_meal_plan(out)?,
            Command::ListCookBook => {
                for recipe in &self.cook_book {
                    writeln!(out, "{}", sanitise_command(recipe.name()))?;
                }
            }
            Command::ListShopping => match &self.shopping_list {
                Some(list) => display_ingredients(list.entries(), out)?,
                None => writeln!(out, "{NO_SHOPPING_LIST}")?,
            },
            Command::Generate => {
                let list = ShoppingList::generate(&self.meal_plan);
                display_ingredients(list.entries(), out)?;
                self.shopping_list = Some(list);
            }
            Command::Unknown(raw) => {
                writeln!(out, "Unknown command '{raw}'. Enter h for help.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn make_recipe(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        let Some(name) = prompt(input, out, RECIPE_NAME_PROMPT)? else {
            return Ok(());
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            writeln!(out, "Error: recipe name cannot be empty")?;
            return Ok(());
        }

        let mut lines = Vec::new();
        while let Some(line) = prompt(input, out, INGREDIENT_PROMPT)? {
            if line.is_empty() {
                break;
            }
            match parse_ingredient(&line) {
                Ok(_) => lines.push(line),
                Err(err) => {
                    warn!(input = %line, "rejected ingredient: {err}");
                    writeln!(out, "Error: {err}")?;
                }
            }
        }

        let recipe = Recipe::new(name, &lines)?;
        info!(
            recipe = recipe.name(),
            ingredients = recipe.ingredients().len(),
            "added recipe to cook book"
        );
        self.cook_book.add(recipe);
        Ok(())
    }

    fn add_to_meal_plan(&mut self, name: &str, out: &mut impl Write) -> Result<()> {
        let found = self
            .cook_book
            .find_by(|recipe| sanitise_command(recipe.name()) == name)
            .cloned();
        match found {
            Some(recipe) => {
                info!(recipe = recipe.name(), "added to meal plan");
                self.meal_plan.add(recipe);
            }
            None => {
                debug!(recipe = name, "recipe not found");
                writeln!(out, "\nRecipe does not exist in the cook book. ")?;
                writeln!(out, "Use the mkrec command to create a new recipe.\n")?;
            }
        }
        Ok(())
    }

    fn list_meal_plan(&self, out: &mut impl Write) -> Result<()> {
        if self.meal_plan.is_empty() {
            writeln!(out, "{NO_MEAL_PLAN}")?;
            return Ok(());
        }
        for recipe in &self.meal_plan {
            writeln!(
                out,
                "{}: {}",
                recipe.name(),
                recipe.ingredient_lines().join(", ")
            )?;
        }
        Ok(())
    }
}

/// Write `message`, then read one line without its line terminator.
/// Returns `None` at end of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocery_core::{cook_book, IngredientEntry};
    use std::io::Cursor;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::new(cook_book::builtin().unwrap());
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        session.run(&mut input, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    fn plan_names(session: &Session) -> Vec<&str> {
        session.meal_plan().iter().map(Recipe::name).collect()
    }

    #[test]
    fn quits_on_q_and_at_end_of_input() {
        let (_, output) = run_script("q\nls\n");
        assert_eq!(output, COMMAND_PROMPT);

        let (_, output) = run_script("");
        assert_eq!(output, COMMAND_PROMPT);
    }

    #[test]
    fn adds_recipes_using_sanitised_names() {
        let (session, _) = run_script("add c4hocolate Brownies\nadd PEANUT butter\nq\n");
        assert_eq!(plan_names(&session), vec!["chocolate brownies", "peanut butter"]);
    }

    #[test]
    fn unknown_recipe_prints_hint() {
        let (session, output) = run_script("add lasagne\nq\n");
        assert!(session.meal_plan().is_empty());
        assert!(output.contains(
            "\nRecipe does not exist in the cook book. \nUse the mkrec command to create a new recipe.\n\n"
        ));
    }

    #[test]
    fn removes_recipes_from_meal_plan() {
        let (session, _) = run_script("add seitan\nadd peanut butter\nrm Seitan\nrm lasagne\nq\n");
        assert_eq!(plan_names(&session), vec!["peanut butter"]);
    }

    #[test]
    fn lists_meal_plan() {
        let (_, output) = run_script("ls\nadd peanut butter\nls\nq\n");
        assert!(output.contains(NO_MEAL_PLAN));
        assert!(output.contains("peanut butter: 300.0 g peanuts, 0.5 tsp salt, 2.0 tsp oil\n"));
    }

    #[test]
    fn lists_cook_book_names() {
        let (_, output) = run_script("ls -a\nq\n");
        for name in [
            "chocolate peanut butter banana shake",
            "chocolate brownies",
            "seitan",
            "cinnamon rolls",
            "peanut butter",
            "mung bean omelette",
        ] {
            assert!(output.contains(&format!("{name}\n")), "missing {name}");
        }
    }

    #[test]
    fn generates_and_displays_shopping_list() {
        let (session, output) = run_script("add peanut butter\ng\nq\n");
        assert!(output.contains(
            "| 300.0 |  g   | peanuts  |\n|   0.5 | tsp  | salt     |\n|   2.0 | tsp  | oil      |\n"
        ));
        assert_eq!(session.shopping_list().map(ShoppingList::len), Some(3));
    }

    #[test]
    fn shopping_list_commands_before_generate() {
        let (session, output) = run_script("ls -s\nrm -i salt 1\nq\n");
        assert_eq!(output.matches(NO_SHOPPING_LIST).count(), 2);
        assert!(session.shopping_list().is_none());
    }

    #[test]
    fn removes_ingredients_from_shopping_list() {
        let (session, output) =
            run_script("add peanut butter\ng\nrm -i peanuts 100\nrm -i salt 0.5\nls -s\nq\n");
        let list = session.shopping_list().unwrap();
        assert_eq!(
            list.entries(),
            &[
                IngredientEntry::new(200.0, "g", "peanuts"),
                IngredientEntry::new(2.0, "tsp", "oil"),
            ]
        );
        assert!(output.contains("| 200.0 |  g   | peanuts  |\n|   2.0 | tsp  | oil      |\n"));
    }

    #[test]
    fn malformed_ingredient_removal_keeps_session_alive() {
        let (session, output) = run_script("add seitan\ng\nrm -i seitan\nrm -i gluten lots\nls\nq\n");
        assert!(output.contains("Error: usage: rm -i <ingredient name> <amount>"));
        assert!(output.contains("Error: 'lots' is not a valid amount"));
        assert_eq!(session.shopping_list().map(ShoppingList::len), Some(7));
    }

    #[test]
    fn creates_recipes_interactively() {
        let script = "mkrec\npeanut sauce\n300 g peanuts\nsoy sauce\n2 tbsp soy sauce\n\nadd peanut sauce\ng\nq\n";
        let (session, output) = run_script(script);

        let recipe = session.cook_book.find("peanut sauce").unwrap();
        assert_eq!(
            recipe.ingredients(),
            &[
                IngredientEntry::new(300.0, "g", "peanuts"),
                IngredientEntry::new(2.0, "tbsp", "soy sauce"),
            ]
        );
        assert!(output.contains(RECIPE_NAME_PROMPT));
        assert_eq!(output.matches(INGREDIENT_PROMPT).count(), 4);
        assert!(output.contains("Error: ingredient 'soy sauce' needs an amount, a measure and a name"));
        assert!(output.contains("| 300.0 |   g   | peanuts    |\n|   2.0 | tbsp  | soy sauce  |\n"));
    }

    #[test]
    fn blank_recipe_name_aborts_mkrec() {
        let (session, output) = run_script("mkrec\n  \nq\n");
        assert_eq!(session.cook_book.len(), 6);
        assert!(output.contains("Error: recipe name cannot be empty"));
    }

    #[test]
    fn help_and_unknown_commands() {
        let (_, output) = run_script("h\nfrobnicate\n\nq\n");
        assert!(output.contains(HELP_TEXT));
        assert!(output.contains("Unknown command 'frobnicate'. Enter h for help."));
        assert_eq!(output.matches(COMMAND_PROMPT).count(), 4);
    }
}
