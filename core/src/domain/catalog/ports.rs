use chrono::Weekday;

use crate::domain::{
    catalog::entities::{CatalogEntry, DailyMenu, ScheduleDay},
    common::entities::app_errors::CoreError,
};

pub trait CatalogService: Send + Sync {
    fn list_catalog_recipes(&self) -> &[CatalogEntry];

    fn get_catalog_recipe(&self, name: &str) -> Result<&CatalogEntry, CoreError>;

    fn weekly_schedule(&self) -> &[ScheduleDay];

    fn recipes_for_day(&self, day: Weekday) -> DailyMenu;
}
