pub mod get_catalog_recipe;
pub mod get_daily_menu;
pub mod get_schedule;
pub mod list_catalog_recipes;
