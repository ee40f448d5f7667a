use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{common::entities::Notice, gallery::entities::GalleryImage};

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub data: Bytes,
}

/// An upload decoded and re-encoded to the gallery format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImage {
    pub content_hash: String,
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
}

impl From<NormalizedImage> for GalleryImage {
    fn from(value: NormalizedImage) -> Self {
        GalleryImage::new(value.content_hash, value.data, value.width, value.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RejectedUpload {
    pub file_name: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UploadSummary {
    pub added: Vec<GalleryImage>,
    pub duplicates: usize,
    pub rejected: Vec<RejectedUpload>,
    pub notices: Vec<Notice>,
}
