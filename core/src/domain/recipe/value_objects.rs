use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::Notice, recipe::entities::GeneratedRecipe,
    shelf::entities::IngredientName, shopping::ShoppingLink,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DietPreference {
    #[default]
    None,
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    Keto,
    #[serde(rename = "Low-Carb")]
    LowCarb,
    Paleo,
}

impl DietPreference {
    pub fn label(self) -> &'static str {
        match self {
            DietPreference::None => "None",
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::Vegan => "Vegan",
            DietPreference::GlutenFree => "Gluten-Free",
            DietPreference::Keto => "Keto",
            DietPreference::LowCarb => "Low-Carb",
            DietPreference::Paleo => "Paleo",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CuisinePreference {
    #[default]
    Any,
    Italian,
    Mexican,
    Asian,
    Mediterranean,
    American,
    Indian,
    French,
}

impl CuisinePreference {
    pub fn label(self) -> &'static str {
        match self {
            CuisinePreference::Any => "Any",
            CuisinePreference::Italian => "Italian",
            CuisinePreference::Mexican => "Mexican",
            CuisinePreference::Asian => "Asian",
            CuisinePreference::Mediterranean => "Mediterranean",
            CuisinePreference::American => "American",
            CuisinePreference::Indian => "Indian",
            CuisinePreference::French => "French",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub diet: DietPreference,
    pub cuisine: CuisinePreference,
    pub count: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RecipeBatch {
    pub recipes: Vec<GeneratedRecipe>,
    /// Shelf items used up by this batch.
    pub consumed: Vec<IngredientName>,
    pub shopping_links: Vec<ShoppingLink>,
    pub notices: Vec<Notice>,
}
