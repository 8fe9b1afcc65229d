use thiserror::Error;

/// Errors surfaced by the sketch tool and its persistence helpers.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The drawing surface could not provide a rendering context
    #[error("drawing surface has no rendering context")]
    SurfaceUnavailable,

    #[error("failed to (de)serialize sketch: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SketchResult<T> = Result<T, SketchError>;
