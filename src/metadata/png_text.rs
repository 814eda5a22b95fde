use std::io::Read;

use tracing::warn;

use crate::error::ExtractError;
use crate::state::data::MetadataFields;

/// Read the textual chunks (tEXt, zTXt, iTXt) stored ahead of the image data.
///
/// Only the header section is parsed; pixel data is never decoded.
/// A compressed chunk that fails to inflate is logged and left out.
pub fn read_png_text<R: Read>(data: R) -> Result<MetadataFields, ExtractError> {
    let decoder = png::Decoder::new(data);
    let reader = decoder.read_info()?;
    let info = reader.info();

    let mut fields = MetadataFields::new();

    for chunk in &info.uncompressed_latin1_text {
        fields.insert(chunk.keyword.clone(), chunk.text.clone());
    }

    for chunk in &info.compressed_latin1_text {
        match chunk.get_text() {
            Ok(text) => fields.insert(chunk.keyword.clone(), text),
            Err(e) => warn!("Skipping zTXt chunk '{}': {}", chunk.keyword, e),
        }
    }

    for chunk in &info.utf8_text {
        match chunk.get_text() {
            Ok(text) => fields.insert(chunk.keyword.clone(), text),
            Err(e) => warn!("Skipping iTXt chunk '{}': {}", chunk.keyword, e),
        }
    }

    Ok(fields)
}
