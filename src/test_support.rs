//! Fixture images for unit tests

use std::fs;
use std::path::Path;

/// Exif tag ids used by the fixtures
pub const TAG_IMAGE_DESCRIPTION: u16 = 0x010E;
pub const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
pub const TAG_USER_COMMENT: u16 = 0x9286;

const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const TYPE_UNDEFINED: u16 = 7;

struct IfdEntry {
    tag: u16,
    kind: u16,
    count: u32,
    value: Vec<u8>,
}

/// A 1x1 PNG carrying the given tEXt chunks
pub fn png_with_text(chunks: &[(&str, &str)]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, 1, 1);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        for (keyword, text) in chunks {
            encoder
                .add_text_chunk(keyword.to_string(), text.to_string())
                .unwrap();
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0, 0, 0]).unwrap();
        writer.finish().unwrap();
    }
    buf
}

/// A plain 1x1 baseline JPEG
pub fn plain_jpeg() -> Vec<u8> {
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buf)
        .encode(&[0, 0, 0], 1, 1, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

/// UserComment payload in the "UNICODE" charset, UTF-16 big endian
pub fn unicode_user_comment(text: &str) -> Vec<u8> {
    let mut out = b"UNICODE\0".to_vec();
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Little-endian TIFF block with an optional ImageDescription in IFD0 and
/// an optional UserComment in the Exif IFD
pub fn exif_tiff(description: Option<&str>, user_comment: Option<&[u8]>) -> Vec<u8> {
    let mut ifd0 = Vec::new();
    if let Some(text) = description {
        let mut value = text.as_bytes().to_vec();
        value.push(0);
        ifd0.push(IfdEntry {
            tag: TAG_IMAGE_DESCRIPTION,
            kind: TYPE_ASCII,
            count: value.len() as u32,
            value,
        });
    }

    let ifd0_offset = 8usize;
    let ifd0_count = ifd0.len() + usize::from(user_comment.is_some());
    let ifd0_len = 2 + 12 * ifd0_count + 4;
    let exif_offset = ifd0_offset + ifd0_len;

    let mut exif_ifd = Vec::new();
    if let Some(comment) = user_comment {
        ifd0.push(IfdEntry {
            tag: TAG_EXIF_IFD_POINTER,
            kind: TYPE_LONG,
            count: 1,
            value: (exif_offset as u32).to_le_bytes().to_vec(),
        });
        exif_ifd.push(IfdEntry {
            tag: TAG_USER_COMMENT,
            kind: TYPE_UNDEFINED,
            count: comment.len() as u32,
            value: comment.to_vec(),
        });
    }
    let exif_len = if exif_ifd.is_empty() {
        0
    } else {
        2 + 12 * exif_ifd.len() + 4
    };
    let data_offset = exif_offset + exif_len;

    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&(ifd0_offset as u32).to_le_bytes());

    let mut data = Vec::new();
    write_ifd(&mut out, &ifd0, data_offset, &mut data);
    if !exif_ifd.is_empty() {
        write_ifd(&mut out, &exif_ifd, data_offset, &mut data);
    }
    out.extend_from_slice(&data);
    out
}

fn write_ifd(out: &mut Vec<u8>, entries: &[IfdEntry], data_offset: usize, data: &mut Vec<u8>) {
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in entries {
        out.extend_from_slice(&entry.tag.to_le_bytes());
        out.extend_from_slice(&entry.kind.to_le_bytes());
        out.extend_from_slice(&entry.count.to_le_bytes());
        if entry.value.len() <= 4 {
            let mut inline = entry.value.clone();
            inline.resize(4, 0);
            out.extend_from_slice(&inline);
        } else {
            let offset = data_offset + data.len();
            out.extend_from_slice(&(offset as u32).to_le_bytes());
            data.extend_from_slice(&entry.value);
            if data.len() % 2 == 1 {
                data.push(0);
            }
        }
    }
    out.extend_from_slice(&0u32.to_le_bytes());
}

/// A 1x1 JPEG with an Exif APP1 segment right after SOI
pub fn jpeg_with_exif(description: Option<&str>, user_comment: Option<&[u8]>) -> Vec<u8> {
    let tiff = exif_tiff(description, user_comment);
    let jpeg = plain_jpeg();

    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Write `bytes` to `dir/name`, creating parent directories
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}

/// A 1x1 extended (VP8X) WebP with `tiff` stored in an EXIF chunk
pub fn webp_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::new();
    image::codecs::webp::WebPEncoder::new_lossless(&mut encoded)
        .encode(&[0, 0, 0], 1, 1, image::ExtendedColorType::Rgb8)
        .unwrap();
    let bitstream = riff_chunk(&encoded, b"VP8L").expect("lossless encoder writes VP8L");

    // Flags (EXIF present), reserved, canvas width - 1, canvas height - 1
    let header = [0x08, 0, 0, 0, 0, 0, 0, 0, 0, 0];

    let mut body = b"WEBP".to_vec();
    push_riff_chunk(&mut body, b"VP8X", &header);
    push_riff_chunk(&mut body, b"VP8L", &bitstream);
    push_riff_chunk(&mut body, b"EXIF", tiff);

    let mut out = b"RIFF".to_vec();
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(&body);
    out
}

fn push_riff_chunk(out: &mut Vec<u8>, fourcc: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(fourcc);
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(data);
    if data.len() % 2 == 1 {
        out.push(0);
    }
}

fn riff_chunk(data: &[u8], fourcc: &[u8; 4]) -> Option<Vec<u8>> {
    let mut offset = 12;
    while offset + 8 <= data.len() {
        let size = u32::from_le_bytes([
            data[offset + 4],
            data[offset + 5],
            data[offset + 6],
            data[offset + 7],
        ]) as usize;
        let start = offset + 8;
        let end = (start + size).min(data.len());
        if &data[offset..offset + 4] == fourcc {
            return Some(data[start..end].to_vec());
        }
        offset = start + size + size % 2;
    }
    None
}

/// Route `tracing` output to the test harness
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
