use larder_core::domain::recipe::value_objects::{CuisinePreference, DietPreference};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_count() -> u8 {
    1
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipesValidator {
    #[serde(default)]
    pub diet: DietPreference,
    #[serde(default)]
    pub cuisine: CuisinePreference,
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 5, message = "count must be between 1 and 5"))]
    pub count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_labels() {
        let payload: GenerateRecipesValidator = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.diet, DietPreference::None);
        assert_eq!(payload.cuisine, CuisinePreference::Any);
        assert_eq!(payload.count, 1);
        assert!(payload.validate().is_ok());

        let payload: GenerateRecipesValidator =
            serde_json::from_str(r#"{"diet":"Gluten-Free","cuisine":"Italian","count":6}"#)
                .unwrap();
        assert_eq!(payload.diet, DietPreference::GlutenFree);
        assert!(payload.validate().is_err());
    }
}
