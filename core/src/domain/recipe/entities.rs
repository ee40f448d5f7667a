use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recipe text as returned by the text model. Its structure is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub text: String,
    /// Set when generation failed and `text` is the fallback message.
    pub fallback: bool,
}

impl GeneratedRecipe {
    pub fn new(text: String) -> Self {
        Self {
            text,
            fallback: false,
        }
    }

    pub fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            fallback: true,
        }
    }
}
