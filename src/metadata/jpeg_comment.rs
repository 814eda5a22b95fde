//! JPEG comment (COM segment) reader
//!
//! Walks the marker segments up to the start of scan and returns the
//! first comment found. Malformed streams simply yield no comment.

const MARKER_SOI: u8 = 0xD8;
const MARKER_EOI: u8 = 0xD9;
const MARKER_SOS: u8 = 0xDA;
const MARKER_COM: u8 = 0xFE;

/// Extract the first COM segment as text
pub fn read_jpeg_comment(data: &[u8]) -> Option<String> {
    if data.len() < 4 || data[0] != 0xFF || data[1] != MARKER_SOI {
        return None;
    }

    let mut offset = 2;
    while offset + 4 <= data.len() {
        if data[offset] != 0xFF {
            return None;
        }
        let marker = data[offset + 1];

        // Fill bytes
        if marker == 0xFF {
            offset += 1;
            continue;
        }
        if marker == MARKER_SOS || marker == MARKER_EOI {
            return None;
        }
        // Standalone markers carry no length
        if marker == 0x01 || (0xD0..=0xD7).contains(&marker) {
            offset += 2;
            continue;
        }

        let length = u16::from_be_bytes([data[offset + 2], data[offset + 3]]) as usize;
        if length < 2 {
            return None;
        }
        let payload_start = offset + 4;
        let payload_end = offset + 2 + length;
        if payload_end > data.len() {
            return None;
        }

        if marker == MARKER_COM {
            let text = String::from_utf8_lossy(&data[payload_start..payload_end]);
            return Some(text.trim_end_matches('\0').to_string());
        }

        offset = payload_end;
    }

    None
}
