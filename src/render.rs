//! HTML rendering of a result page
//!
//! All text coming from files or from the user is escaped; the only markup
//! in the output is what this module writes itself.

use crate::search::fold::find_folded_matches;
use crate::state::data::ImageRecord;

/// Where the host serves local files from
pub const DEFAULT_FILE_URL_PREFIX: &str = "http://127.0.0.1:7860/file=";

const TABLE_STYLE: &str = r#"
<style>
    .metadata-table {
        width: 100%;
        border-collapse: collapse;
    }
    .metadata-table th, .metadata-table td {
        border: 1px solid black;
        padding: 5px;
        text-align: left;
        vertical-align: top;
    }
    .metadata-table .image-cell img {
        width: 300px;
    }
    .metadata-table .metadata-cell pre {
        max-width: 600px;
        white-space: pre-wrap;
        word-wrap: break-word;
    }
</style>
"#;

/// Rendering knobs supplied by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepended to an image path to build its `<img src>`
    pub file_url_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            file_url_prefix: DEFAULT_FILE_URL_PREFIX.to_string(),
        }
    }
}

/// Escape `& < > " '` for use in element text and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape `text` and wrap every case-insensitive occurrence of a term in `<b>`.
///
/// Terms are matched with the same folding the filter uses. Empty terms are
/// ignored. Overlapping matches from different terms are merged into one
/// emphasized span.
pub fn highlight_keywords(text: &str, terms: &[String]) -> String {
    let mut spans: Vec<(usize, usize)> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .flat_map(|term| find_folded_matches(text, term))
        .collect();
    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut out = String::with_capacity(text.len() + merged.len() * 7);
    let mut pos = 0;
    for (start, end) in merged {
        out.push_str(&escape_html(&text[pos..start]));
        out.push_str("<b>");
        out.push_str(&escape_html(&text[start..end]));
        out.push_str("</b>");
        pos = end;
    }
    out.push_str(&escape_html(&text[pos..]));
    out
}

/// A single-paragraph status message
pub fn render_message(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}

/// The result table for one page of records
pub fn render_results(records: &[ImageRecord], terms: &[String], options: &RenderOptions) -> String {
    let mut html = String::from(TABLE_STYLE);
    html.push_str(
        "<table class=\"metadata-table\">\n    <tr>\n        <th>Image</th>\n        <th>Metadata</th>\n    </tr>\n",
    );

    for record in records {
        html.push_str(&render_row(record, terms, options));
    }

    html.push_str("</table>");
    html
}

fn render_row(record: &ImageRecord, terms: &[String], options: &RenderOptions) -> String {
    let src = format!(
        "{}{}",
        escape_html(&options.file_url_prefix),
        escape_html(&record.image_path)
    );
    let folder = highlight_keywords(&record.folder_path, terms);
    let metadata = highlight_keywords(&record.metadata_text, terms);

    format!(
        "    <tr>\n        <td class=\"image-cell\"><img src='{}' /></td>\n        <td class=\"metadata-cell\">\n            <pre>Folder: {}\n{}</pre>\n        </td>\n    </tr>\n",
        src, folder, metadata
    )
}
