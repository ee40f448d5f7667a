use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pages of the kitchen helper, in the order a user walks through them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    UploadImages,
    IdentifyIngredients,
    Shelf,
    GenerateRecipe,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::UploadImages,
        Page::IdentifyIngredients,
        Page::Shelf,
        Page::GenerateRecipe,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::UploadImages => "Upload Images",
            Page::IdentifyIngredients => "Identify Ingredients",
            Page::Shelf => "Shelf",
            Page::GenerateRecipe => "Generate Recipe",
        }
    }
}
