use thiserror::Error;

/// Errors raised by the raster core and the export bridge.
///
/// None of these reach the user: the editor logs them and carries on as if
/// the failing operation had been a no-op.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to encode snapshot: {0}")]
    Encode(String),

    #[error("Failed to decode snapshot: {0}")]
    Decode(String),

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for surface, history and export operations
pub type SketchResult<T> = Result<T, SketchError>;
