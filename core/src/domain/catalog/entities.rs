use chrono::Weekday;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RecipeRecord {
    pub yields: String,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(flatten)]
    pub recipe: RecipeRecord,
}

/// Two catalog recipe names suggested for one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDay {
    pub day: Weekday,
    pub recipes: [String; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScheduledRecipe {
    Available { name: String, recipe: RecipeRecord },
    /// The schedule names a recipe the catalog does not have.
    Missing { name: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DailyMenu {
    pub day: String,
    pub recipes: Vec<ScheduledRecipe>,
}

/// Read-only reference recipes plus the weekly schedule drawn from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCatalog {
    entries: Vec<CatalogEntry>,
    schedule: Vec<ScheduleDay>,
}

impl RecipeCatalog {
    pub fn new(entries: Vec<CatalogEntry>, schedule: Vec<ScheduleDay>) -> Self {
        Self { entries, schedule }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn schedule(&self) -> &[ScheduleDay] {
        &self.schedule
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Schedule entries that reference recipes missing from the catalog.
    pub fn missing_references(&self) -> Vec<(Weekday, String)> {
        self.schedule
            .iter()
            .flat_map(|day| day.recipes.iter().map(move |name| (day.day, name)))
            .filter(|(_, name)| self.get(name).is_none())
            .map(|(day, name)| (day, name.clone()))
            .collect()
    }

    pub fn menu_for(&self, day: Weekday) -> DailyMenu {
        let recipes = self
            .schedule
            .iter()
            .find(|scheduled| scheduled.day == day)
            .map(|scheduled| {
                scheduled
                    .recipes
                    .iter()
                    .map(|name| match self.get(name) {
                        Some(entry) => ScheduledRecipe::Available {
                            name: entry.name.clone(),
                            recipe: entry.recipe.clone(),
                        },
                        None => ScheduledRecipe::Missing {
                            name: name.clone(),
                            error: format!("Recipe '{}' is missing!", name),
                        },
                    })
                    .collect()
            })
            .unwrap_or_default();

        DailyMenu {
            day: weekday_name(day).to_string(),
            recipes,
        }
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
