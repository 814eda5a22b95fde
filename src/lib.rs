//! Keyword search over the metadata embedded in generated images.
//!
//! Each search walks the folder again, reads PNG text chunks, JPEG
//! comments and Exif tags, keeps the images whose metadata (or folder)
//! contains every keyword and renders one page of them as HTML.

pub mod app;
pub mod error;
pub mod metadata;
pub mod render;
pub mod search;
pub mod state;

#[cfg(test)]
mod test_support;

pub use app::{search, MetadataSearch, SearchOutcome, SearchQuery, SearchResponse};
pub use error::{Error, Result};
pub use render::RenderOptions;
pub use search::PageSize;
pub use state::data::{CommonWord, ImageRecord, Settings};
pub use state::settings::SettingsStore;
