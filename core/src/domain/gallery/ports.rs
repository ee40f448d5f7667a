use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    gallery::{
        entities::GalleryImage,
        value_objects::{ImageUpload, UploadSummary},
    },
    session::entities::KitchenSession,
};

pub trait GalleryService: Send + Sync {
    /// Adds every upload that decodes and is not already in the gallery.
    fn add_images(
        &self,
        session: &mut KitchenSession,
        uploads: Vec<ImageUpload>,
    ) -> impl Future<Output = Result<UploadSummary, CoreError>> + Send;

    fn get_image<'a>(
        &self,
        session: &'a KitchenSession,
        image_id: Uuid,
    ) -> Result<&'a GalleryImage, CoreError>;

    fn clear_gallery(&self, session: &mut KitchenSession) -> usize;
}
