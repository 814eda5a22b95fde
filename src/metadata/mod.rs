/// Image metadata extraction module
///
/// This module handles:
/// - Walking a folder for image files (scanner.rs)
/// - PNG text chunks (png_text.rs)
/// - JPEG comment segments (jpeg_comment.rs)
/// - Exif tags, including encoded user comments (exif_tags.rs)
/// - Building one flat record per image (extractor.rs)

pub mod scanner;
pub mod png_text;
pub mod jpeg_comment;
pub mod exif_tags;
pub mod extractor;

pub use extractor::extract_metadata;
