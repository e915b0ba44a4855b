//! Kernel error types.

use lumina_api::{CircleId, PostId, UserId, WhisperKind};
use thiserror::Error;

/// Failures of the masonry layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid configuration: column count must be at least 1, got {0}")]
    InvalidConfiguration(usize),
}

#[derive(Debug, Error)]
pub enum LuminaError {
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("empty content: {0}")]
    EmptyContent(&'static str),

    #[error("{0:?} whisper requires a media url")]
    MissingMedia(WhisperKind),

    #[error("post not found: {0}")]
    PostNotFound(PostId),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("circle not found: {0}")]
    CircleNotFound(CircleId),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
