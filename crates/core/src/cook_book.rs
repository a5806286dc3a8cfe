//! Recipes available in every session.

use crate::{error::RecipeError, models::Recipe, store::RecipeStore};

/// The builtin cook book, in display order.
pub fn builtin() -> Result<RecipeStore, RecipeError> {
    [
        chocolate_peanut_butter_shake(),
        chocolate_brownies(),
        seitan(),
        cinnamon_rolls(),
        peanut_butter(),
        mung_bean_omelette(),
    ]
    .into_iter()
    .collect()
}

/// Banana shake with peanut butter and cocoa.
pub fn chocolate_peanut_butter_shake() -> Result<Recipe, RecipeError> {
    Recipe::new(
        "chocolate peanut butter banana shake",
        [
            "1 large banana",
            "240 ml almond milk",
            "2 tbsp peanut butter",
            "1 tbsp cocoa powder",
            "0.5 cup ice",
        ],
    )
}

/// Egg-free cocoa brownies.
pub fn chocolate_brownies() -> Result<Recipe, RecipeError> {
    Recipe::new(
        "chocolate brownies",
        [
            "140 g flour",
            "55 g cocoa powder",
            "1 tsp salt",
            "1 tsp baking powder",
            "1 tsp coffee granules",
            "200 g sugar",
            "120 ml soy milk",
            "120 ml vegetable oil",
            "1 tsp vanilla extract",
            "100 g dark chocolate",
        ],
    )
}

/// Wheat gluten seitan.
pub fn seitan() -> Result<Recipe, RecipeError> {
    Recipe::new(
        "seitan",
        [
            "150 g vital wheat gluten",
            "2 tbsp nutritional yeast",
            "1 tsp garlic powder",
            "1 tsp onion powder",
            "160 ml vegetable broth",
            "2 tbsp soy sauce",
            "1 tbsp tomato paste",
        ],
    )
}

/// Cinnamon rolls with icing.
pub fn cinnamon_rolls() -> Result<Recipe, RecipeError> {
    Recipe::new(
        "cinnamon rolls",
        [
            "480 ml almond milk",
            "115 g Nuttelex",
            "50 g sugar",
            "7 g active dry yeast",
            "5.5 cup flour",
            "1 tsp salt",
            "170 g Nuttelex",
            "165 g brown sugar",
            "2 tbsp cinnamon",
            "160 g powdered sugar",
            "30 ml almond milk",
            "0.5 tsp vanilla extract",
        ],
    )
}

/// Homemade peanut butter.
pub fn peanut_butter() -> Result<Recipe, RecipeError> {
    Recipe::new("peanut butter", ["300 g peanuts", "0.5 tsp salt", "2 tsp oil"])
}

/// Egg-free mung bean omelette.
pub fn mung_bean_omelette() -> Result<Recipe, RecipeError> {
    Recipe::new(
        "mung bean omelette",
        [
            "1 cup mung bean",
            "0.5 tsp salt",
            "1 tsp oil",
            "0.75 tsp pink salt",
            "0.25 tsp garlic powder",
            "0.25 tsp onion powder",
            "0.125 tsp pepper",
            "0.25 tsp turmeric",
            "1 cup soy milk",
        ],
    )
}
