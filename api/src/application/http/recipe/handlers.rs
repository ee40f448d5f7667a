pub mod export_recipes;
pub mod generate_recipes;
pub mod get_recipes;
