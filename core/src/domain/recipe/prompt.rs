use crate::domain::{
    recipe::value_objects::{CuisinePreference, DietPreference},
    shelf::entities::IngredientName,
};

pub fn build_recipe_prompt(
    items: &[IngredientName],
    diet: DietPreference,
    cuisine: CuisinePreference,
) -> String {
    let ingredients = items
        .iter()
        .map(IngredientName::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let mut parts = vec![format!(
        "Create a recipe using these ingredients: {}.",
        ingredients
    )];

    if diet != DietPreference::None {
        parts.push(format!(
            "The recipe should be {}.",
            diet.label().to_lowercase()
        ));
    }

    if cuisine != CuisinePreference::Any {
        parts.push(format!("The recipe should be {} cuisine.", cuisine.label()));
    }

    parts.push(
        "Provide the recipe name, ingredients with quantities, and step-by-step instructions."
            .to_string(),
    );

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<IngredientName> {
        names
            .iter()
            .map(|n| IngredientName::parse(n).unwrap())
            .collect()
    }

    #[test]
    fn test_prompt_without_preferences() {
        let prompt = build_recipe_prompt(
            &items(&["Rice", "Olive Oil"]),
            DietPreference::None,
            CuisinePreference::Any,
        );
        assert_eq!(
            prompt,
            "Create a recipe using these ingredients: Rice, Olive Oil. Provide the recipe name, ingredients with quantities, and step-by-step instructions."
        );
    }

    #[test]
    fn test_prompt_with_diet_and_cuisine() {
        let prompt = build_recipe_prompt(
            &items(&["Tofu"]),
            DietPreference::GlutenFree,
            CuisinePreference::Indian,
        );
        assert!(prompt.contains("The recipe should be gluten-free."));
        assert!(prompt.contains("The recipe should be Indian cuisine."));
        assert!(prompt.starts_with("Create a recipe using these ingredients: Tofu."));
    }

    #[test]
    fn test_prompt_with_cuisine_only() {
        let prompt = build_recipe_prompt(
            &items(&["Beans"]),
            DietPreference::None,
            CuisinePreference::Mexican,
        );
        assert!(!prompt.contains("should be none"));
        assert!(prompt.contains("The recipe should be Mexican cuisine."));
    }
}
