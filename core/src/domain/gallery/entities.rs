use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// MIME type of every image held in a gallery. Uploads are re-encoded to it.
pub const GALLERY_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GalleryImage {
    pub id: Uuid,
    /// Hex SHA-256 of the JPEG encoding.
    pub content_hash: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
    pub added_at: DateTime<Utc>,
    #[serde(skip)]
    pub data: Bytes,
}

impl GalleryImage {
    pub fn new(content_hash: String, data: Bytes, width: u32, height: u32) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            content_hash,
            width,
            height,
            size_bytes: data.len(),
            added_at: now,
            data,
        }
    }
}
