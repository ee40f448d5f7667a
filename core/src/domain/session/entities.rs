use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    gallery::entities::GalleryImage,
    recipe::entities::GeneratedRecipe,
    session::page::Page,
    shelf::entities::{IngredientName, Shelf},
};

/// Everything one user works with between creating and ending a session.
#[derive(Debug, Clone)]
pub struct KitchenSession {
    pub id: Uuid,
    pub page: Page,
    pub gallery: Vec<GalleryImage>,
    pub ingredients: Vec<IngredientName>,
    pub shelf: Shelf,
    pub selected: Vec<IngredientName>,
    pub recipes: Vec<GeneratedRecipe>,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

impl KitchenSession {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            page: Page::Home,
            gallery: Vec::new(),
            ingredients: Vec::new(),
            shelf: Shelf::with_staples(),
            selected: Vec::new(),
            recipes: Vec::new(),
            created_at: now,
            last_active_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    /// Checks whether `target` may be entered with the current state.
    pub fn ensure_can_enter(&self, target: Page) -> Result<(), CoreError> {
        match target {
            Page::Home | Page::UploadImages | Page::Shelf => Ok(()),
            Page::IdentifyIngredients if self.gallery.is_empty() => {
                Err(CoreError::NavigationBlocked(
                    "Please upload at least one image before proceeding.".to_string(),
                ))
            }
            Page::IdentifyIngredients => Ok(()),
            Page::GenerateRecipe if self.shelf.is_empty() => Err(CoreError::NavigationBlocked(
                "Your shelf is empty. Please add ingredients to your shelf first.".to_string(),
            )),
            Page::GenerateRecipe if self.selected.is_empty() => Err(
                CoreError::NavigationBlocked("Please select ingredients from the shelf.".to_string()),
            ),
            Page::GenerateRecipe => Ok(()),
        }
    }

    pub fn navigate(&mut self, target: Page) -> Result<Page, CoreError> {
        self.ensure_can_enter(target)?;
        self.page = target;
        Ok(self.page)
    }
}

impl Default for KitchenSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn gallery_image() -> GalleryImage {
        GalleryImage::new("abc".to_string(), Bytes::from_static(b"jpeg"), 1, 1)
    }

    #[test]
    fn test_new_session_starts_home_with_staples() {
        let session = KitchenSession::new();
        assert_eq!(session.page, Page::Home);
        assert_eq!(session.shelf.len(), 4);
        assert!(session.shelf.contains("Olive Oil"));
        assert!(session.gallery.is_empty());
    }

    #[test]
    fn test_free_pages_are_always_reachable() {
        let mut session = KitchenSession::new();
        session.shelf.clear();
        for page in [Page::Home, Page::UploadImages, Page::Shelf] {
            assert_eq!(session.navigate(page), Ok(page));
        }
    }

    #[test]
    fn test_identify_requires_images() {
        let mut session = KitchenSession::new();
        session.page = Page::UploadImages;

        let result = session.navigate(Page::IdentifyIngredients);
        assert!(matches!(result, Err(CoreError::NavigationBlocked(_))));
        assert_eq!(session.page, Page::UploadImages);

        session.gallery.push(gallery_image());
        assert_eq!(
            session.navigate(Page::IdentifyIngredients),
            Ok(Page::IdentifyIngredients)
        );
    }

    #[test]
    fn test_generate_requires_shelf_and_selection() {
        let mut session = KitchenSession::new();
        session.shelf.clear();
        assert!(session.navigate(Page::GenerateRecipe).is_err());

        session.shelf = Shelf::with_staples();
        assert!(session.navigate(Page::GenerateRecipe).is_err());

        session.selected = vec![IngredientName::parse("Salt").unwrap()];
        assert_eq!(session.navigate(Page::GenerateRecipe), Ok(Page::GenerateRecipe));
    }
}
