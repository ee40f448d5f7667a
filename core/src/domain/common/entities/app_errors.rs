use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Session not found")]
    SessionNotFound,

    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("{0}")]
    NavigationBlocked(String),

    #[error("Image too large: {size} bytes (max {max} bytes)")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Please upload at least one image first")]
    EmptyGallery,

    #[error("Your shelf is empty")]
    EmptyShelf,

    #[error("Please select ingredients from the shelf")]
    EmptySelection,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Document export failed: {0}")]
    ExportError(String),

    #[error("Internal server error")]
    InternalServerError,
}
