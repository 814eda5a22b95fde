use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extensions (lowercase) of files considered for metadata extraction
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Check whether a path has one of the image extensions (case-insensitive)
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Recursively collect every image file under `folder`.
///
/// Entries are visited sorted by file name so results are stable across
/// platforms. Symlinks to files are included; symlinked directories are not
/// descended into. Unreadable directory entries are logged and skipped.
pub fn find_image_files(folder: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", folder.display(), e);
                continue;
            }
        };

        // `Path::is_file` follows the link, `file_type` does not
        if is_image_file(entry.path()) && entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} image files under {}", files.len(), folder.display());
    files
}

/// Render a path with `/` separators regardless of platform
pub fn to_slash_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
