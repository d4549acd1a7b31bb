use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the map core and the snapshot boundary. None of
/// these are fatal to a running session; the controller reports them and
/// carries on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("position ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("malformed map data: {0}")]
    MalformedInput(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
