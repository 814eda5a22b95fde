//! Error types
//!
//! `Error` is what the host sees: only settings-file and argument problems
//! surface. `ExtractError` covers a single image file and is logged, never
//! returned from a search.

use thiserror::Error;

/// Errors visible to the caller of the search facade
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings JSON error: {0}")]
    SettingsCorrupt(#[from] serde_json::Error),
    #[error("Unsupported page size: {0} (expected one of 10, 20, 50, 100)")]
    InvalidPageSize(u32),
    #[error("Page size is not a number: {0:?}")]
    PageSizeNotNumeric(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to read metadata from one image file
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PNG decode error: {0}")]
    Png(#[from] png::DecodingError),
    #[error("EXIF parse error: {0}")]
    Exif(#[from] exif::Error),
    #[error("Unrecognized image format")]
    UnknownFormat,
}
