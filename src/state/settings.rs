use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::data::Settings;
use crate::error::Result;

/// File name of the settings document
pub const SETTINGS_FILE_NAME: &str = "setting.json";

/// The SettingsStore reads and writes the settings JSON document.
/// It holds no settings itself; callers load, mutate and save.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by the default settings location.
    pub fn new() -> Self {
        Self::at(Self::default_path())
    }

    /// Create a store backed by an explicit file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path where the settings should be stored
    ///
    /// One directory above the one holding the executable, e.g.
    /// `<install>/bin/image-metadata-search` -> `<install>/setting.json`.
    /// Falls back to the user's data directory:
    /// - Linux: ~/.local/share/image-metadata-search/setting.json
    /// - macOS: ~/Library/Application Support/image-metadata-search/setting.json
    /// - Windows: %APPDATA%\image-metadata-search\setting.json
    pub fn default_path() -> PathBuf {
        let beside_install = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf));

        match beside_install {
            Some(dir) => dir.join(SETTINGS_FILE_NAME),
            None => {
                let mut path = dirs::data_dir()
                    .or_else(dirs::home_dir)
                    .unwrap_or_else(|| PathBuf::from("."));
                path.push("image-metadata-search");
                path.push(SETTINGS_FILE_NAME);
                path
            }
        }
    }

    /// Get the path to the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings document.
    ///
    /// A missing file yields the defaults. A malformed file is an error.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    /// Overwrite the settings document (indented, non-ASCII kept as-is).
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        settings.serialize(&mut serializer)?;

        fs::write(&self.path, buf)?;
        info!("💾 Settings saved to {}", self.path.display());
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("path", &self.path)
            .finish()
    }
}
