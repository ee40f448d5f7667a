pub mod get_ingredients;
pub mod identify_ingredients;
pub mod update_ingredients;
