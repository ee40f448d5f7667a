pub mod clear_images;
pub mod get_image;
pub mod list_images;
pub mod upload_images;
