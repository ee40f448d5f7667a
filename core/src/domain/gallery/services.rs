use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, ImageFormat};
use sha2::{Digest, Sha256};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::{Notice, app_errors::CoreError},
        services::Service,
    },
    export::ports::DocumentExporter,
    gallery::{
        entities::GalleryImage,
        ports::GalleryService,
        value_objects::{ImageUpload, NormalizedImage, RejectedUpload, UploadSummary},
    },
    identification::ports::LLMClient,
    session::{entities::KitchenSession, ports::SessionRepository},
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

pub fn content_hash(encoded: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(encoded);
    hex::encode(hasher.finalize())
}

/// True iff an image in `existing` has exactly the same encoded bytes as `candidate`.
pub fn is_duplicate(candidate: &[u8], existing: &[GalleryImage]) -> bool {
    let hash = content_hash(candidate);
    existing.iter().any(|image| image.content_hash == hash)
}

/// Decodes an upload and re-encodes it as JPEG, the form images are hashed and sent in.
pub fn normalize_image(raw: &[u8]) -> Result<NormalizedImage, CoreError> {
    if raw.len() > MAX_IMAGE_SIZE {
        return Err(CoreError::ImageTooLarge {
            size: raw.len(),
            max: MAX_IMAGE_SIZE,
        });
    }

    let decoded =
        image::load_from_memory(raw).map_err(|e| CoreError::UnsupportedImage(e.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());

    // The JPEG encoder has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
    let mut encoded = Cursor::new(Vec::new());
    rgb.write_to(&mut encoded, ImageFormat::Jpeg)
        .map_err(|e| CoreError::UnsupportedImage(e.to_string()))?;

    let data = encoded.into_inner();

    Ok(NormalizedImage {
        content_hash: content_hash(&data),
        data: Bytes::from(data),
        width,
        height,
    })
}

impl<S, LLM, DE> GalleryService for Service<S, LLM, DE>
where
    S: SessionRepository,
    LLM: LLMClient,
    DE: DocumentExporter,
{
    #[instrument(skip(self, session, uploads), fields(session_id = %session.id, uploads = uploads.len()))]
    async fn add_images(
        &self,
        session: &mut KitchenSession,
        uploads: Vec<ImageUpload>,
    ) -> Result<UploadSummary, CoreError> {
        let normalized = tokio::task::spawn_blocking(move || {
            uploads
                .into_iter()
                .map(|upload| {
                    let result = normalize_image(&upload.data);
                    (upload.file_name, result)
                })
                .collect::<Vec<_>>()
        })
        .await
        .map_err(|e| {
            error!("Image normalization task failed: {}", e);
            CoreError::InternalServerError
        })?;

        let mut added = Vec::new();
        let mut duplicates = 0;
        let mut rejected = Vec::new();

        for (file_name, result) in normalized {
            match result {
                Ok(image) if is_duplicate(&image.data, &session.gallery) => {
                    duplicates += 1;
                }
                Ok(image) => {
                    let image = GalleryImage::from(image);
                    session.gallery.push(image.clone());
                    added.push(image);
                }
                Err(e) => rejected.push(RejectedUpload {
                    file_name,
                    reason: e.to_string(),
                }),
            }
        }

        let mut notices = Vec::new();
        if !added.is_empty() {
            notices.push(Notice::info(format!(
                "{} new image(s) added successfully!",
                added.len()
            )));
        }
        if duplicates > 0 {
            notices.push(Notice::info(format!(
                "{} duplicate image(s) were not added.",
                duplicates
            )));
        }
        for rejection in &rejected {
            notices.push(Notice::warning(format!(
                "{} was not added: {}",
                rejection.file_name.as_deref().unwrap_or("image"),
                rejection.reason
            )));
        }

        session.touch();

        info!(
            added = added.len(),
            duplicates,
            rejected = rejected.len(),
            gallery_size = session.gallery.len(),
            "Images uploaded"
        );

        Ok(UploadSummary {
            added,
            duplicates,
            rejected,
            notices,
        })
    }

    fn get_image<'a>(
        &self,
        session: &'a KitchenSession,
        image_id: Uuid,
    ) -> Result<&'a GalleryImage, CoreError> {
        session
            .gallery
            .iter()
            .find(|image| image.id == image_id)
            .ok_or(CoreError::NotFound)
    }

    fn clear_gallery(&self, session: &mut KitchenSession) -> usize {
        let removed = session.gallery.len();
        session.gallery.clear();
        session.touch();
        removed
    }
}

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, Rgb};

    use super::*;
    use crate::domain::common::test_support::test_service;
    use crate::domain::identification::ports::MockLLMClient;

    fn png(color: [u8; 3]) -> Vec<u8> {
        let buffer = ImageBuffer::from_pixel(4, 4, Rgb(color));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(buffer)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    fn stored(encoded: &[u8]) -> GalleryImage {
        GalleryImage::new(content_hash(encoded), Bytes::copy_from_slice(encoded), 4, 4)
    }

    #[test]
    fn test_identical_bytes_are_duplicates() {
        let a = b"same encoded bytes".to_vec();
        let b = a.clone();
        assert!(is_duplicate(&b, &[stored(&a)]));
    }

    #[test]
    fn test_different_bytes_are_not_duplicates() {
        let a = b"first image".to_vec();
        let b = b"second image".to_vec();
        assert!(!is_duplicate(&b, &[stored(&a)]));
        assert!(!is_duplicate(&a, &[]));
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let first = normalize_image(&png([200, 10, 10])).unwrap();
        let second = normalize_image(&png([200, 10, 10])).unwrap();
        let other = normalize_image(&png([10, 10, 200])).unwrap();

        assert_eq!(first.content_hash, second.content_hash);
        assert_ne!(first.content_hash, other.content_hash);
        assert_eq!((first.width, first.height), (4, 4));
        assert!(first.data.starts_with(&[0xFF, 0xD8]));
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let result = normalize_image(b"definitely not an image");
        assert!(matches!(result, Err(CoreError::UnsupportedImage(_))));
    }

    #[test]
    fn test_normalize_rejects_oversized_upload() {
        let raw = vec![0u8; MAX_IMAGE_SIZE + 1];
        let result = normalize_image(&raw);
        assert!(matches!(result, Err(CoreError::ImageTooLarge { .. })));
    }

    #[tokio::test]
    async fn test_add_images_skips_duplicates_within_and_across_batches() {
        let service = test_service(MockLLMClient::new());
        let mut session = KitchenSession::new();
        let upload = |color| ImageUpload {
            file_name: None,
            data: Bytes::from(png(color)),
        };

        let summary = service
            .add_images(
                &mut session,
                vec![upload([1, 2, 3]), upload([1, 2, 3]), upload([9, 9, 9])],
            )
            .await
            .unwrap();
        assert_eq!(summary.added.len(), 2);
        assert_eq!(summary.duplicates, 1);

        let summary = service
            .add_images(&mut session, vec![upload([9, 9, 9])])
            .await
            .unwrap();
        assert!(summary.added.is_empty());
        assert_eq!(summary.duplicates, 1);
        assert_eq!(session.gallery.len(), 2);
    }
}
