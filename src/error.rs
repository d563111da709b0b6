use thiserror::Error;

/// The main error type for the ditherbend crate.
///
/// Only the pipeline around the engine produces these; the engine itself
/// never errors (bad parameter values degrade visually, unknown ids warn
/// and fall through, and every sample write is clamped).
#[derive(Debug, Error)]
pub enum DitherbendError {
    #[error("image decode error: {0}")]
    ImageDecode(#[source] image::ImageError),

    #[error("image encode error: {0}")]
    ImageEncode(#[source] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Route an image-crate error to the decode or encode variant by its kind,
/// so `?` on a decode and on an encode call report differently.
impl From<image::ImageError> for DitherbendError {
    fn from(err: image::ImageError) -> Self {
        match &err {
            image::ImageError::Encoding(_) => Self::ImageEncode(err),
            _ => Self::ImageDecode(err),
        }
    }
}

// Convenience type alias for Results using DitherbendError
pub type Result<T = ()> = std::result::Result<T, DitherbendError>;
