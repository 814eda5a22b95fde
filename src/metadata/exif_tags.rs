use std::io::Cursor;
use std::string::FromUtf8Error;

use exif::{Field, In, Tag, Value};
use tracing::warn;

use crate::error::ExtractError;
use crate::state::data::{MetadataFields, EXIF_CONTAINER_KEY};

/// Charset marker written by generators in front of UTF-16 user comments.
/// Eight bytes of charset id plus the leading null of the first code unit.
const UNICODE_MARKER: &[u8; 9] = b"UNICODE\0\0";

/// Read the Exif tags of the primary image from a JPEG/WebP byte stream.
///
/// A stream without Exif yields an empty set. Thumbnail IFD fields are
/// skipped.
pub fn read_exif_tags(data: &[u8]) -> Result<MetadataFields, ExtractError> {
    let mut cursor = Cursor::new(data);
    let exif = match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(MetadataFields::new()),
        Err(e) => return Err(ExtractError::Exif(e)),
    };

    let mut fields = MetadataFields::new();
    for field in exif.fields().filter(|f| f.ifd_num == In::PRIMARY) {
        let name = tag_name(field.tag);
        if name == EXIF_CONTAINER_KEY {
            continue;
        }
        fields.insert(name, field_text(field));
    }
    Ok(fields)
}

/// Human-readable tag name, or the numeric id for tags the decoder does not know
pub fn tag_name(tag: Tag) -> String {
    if tag.description().is_some() {
        tag.to_string()
    } else {
        tag.number().to_string()
    }
}

fn field_text(field: &Field) -> String {
    if field.tag == Tag::UserComment {
        if let Value::Undefined(ref bytes, _) = field.value {
            match decode_user_comment(bytes) {
                Ok(text) => return text,
                Err(e) => warn!("Error decoding UserComment: {}", e),
            }
        }
    }

    match field.value {
        Value::Ascii(ref strings) => strings
            .iter()
            .map(|s| String::from_utf8_lossy(s).trim_end_matches('\0').to_string())
            .collect::<Vec<_>>()
            .join(", "),
        _ => field.display_value().to_string(),
    }
}

/// Decode a UserComment payload.
///
/// Strips the UTF-16 marker when present, drops every null byte left by
/// the UTF-16 padding and decodes the rest as UTF-8.
pub fn decode_user_comment(bytes: &[u8]) -> Result<String, FromUtf8Error> {
    let body = bytes.strip_prefix(&UNICODE_MARKER[..]).unwrap_or(bytes);
    let cleaned: Vec<u8> = body.iter().copied().filter(|&b| b != 0).collect();
    String::from_utf8(cleaned)
}
