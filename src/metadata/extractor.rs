use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};
use tracing::{debug, info, warn};

use super::exif_tags::read_exif_tags;
use super::jpeg_comment::read_jpeg_comment;
use super::png_text::read_png_text;
use super::scanner::{find_image_files, to_slash_string};
use crate::error::ExtractError;
use crate::state::data::{ImageRecord, MetadataFields};

/// Scan `folder` recursively and build one record per readable image.
///
/// Files that fail to open or parse are logged and left out entirely.
pub fn extract_metadata(folder: &Path) -> Vec<ImageRecord> {
    let files = find_image_files(folder);
    let mut records = Vec::with_capacity(files.len());
    let mut skipped = 0usize;

    for path in &files {
        match read_image_record(path) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                skipped += 1;
            }
        }
    }

    info!(
        "📷 Scanned {}: {} images read, {} skipped",
        folder.display(),
        records.len(),
        skipped
    );
    records
}

/// Open one image and flatten its metadata into a record
pub fn read_image_record(path: &Path) -> Result<ImageRecord, ExtractError> {
    // The file is read once and closed before any parsing happens
    let data = fs::read(path)?;
    let fields = read_metadata(&data)?;

    debug!("{}: {} metadata fields", path.display(), fields.len());

    Ok(ImageRecord {
        image_path: to_slash_string(path),
        folder_path: path.parent().map(to_slash_string).unwrap_or_default(),
        metadata_text: fields.to_text(),
    })
}

/// Detect the format from content and collect native info plus Exif tags.
///
/// The format comes from the file signature, not the extension. Exif is
/// only consulted for JPEG and WebP.
pub fn read_metadata(data: &[u8]) -> Result<MetadataFields, ExtractError> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    let format = reader.format().ok_or(ExtractError::UnknownFormat)?;
    // Header must decode, like opening the image would
    reader.into_dimensions()?;

    let mut fields = match format {
        ImageFormat::Png => read_png_text(data)?,
        ImageFormat::Jpeg => {
            let mut native = MetadataFields::new();
            if let Some(comment) = read_jpeg_comment(data) {
                native.insert("comment", comment);
            }
            native
        }
        _ => MetadataFields::new(),
    };

    if carries_exif(format) {
        fields.extend(read_exif_tags(data)?);
    }

    Ok(fields)
}

fn carries_exif(format: ImageFormat) -> bool {
    matches!(format, ImageFormat::Jpeg | ImageFormat::WebP)
}
