/// Shared data structures for the search pipeline
///
/// These structs represent the data model that flows between
/// the metadata extractor, the search engine and the renderer.
use serde::{Deserialize, Serialize};

/// Key of the raw Exif container, never shown in the metadata blob
pub const EXIF_CONTAINER_KEY: &str = "exif";

/// Represents a single scanned image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Full path to the image, `/`-separated
    pub image_path: String,
    /// Directory containing the image, `/`-separated
    pub folder_path: String,
    /// Newline-joined `key: value` lines
    pub metadata_text: String,
}

/// Ordered key/value metadata for one image.
///
/// Inserting an existing key replaces its value in place, so the
/// first-seen position of every key is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFields {
    entries: Vec<(String, String)>,
}

impl MetadataFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Merge `other` into `self`, later values winning
    pub fn extend(&mut self, other: MetadataFields) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten to the metadata blob, dropping the raw `exif` container
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .filter(|(k, _)| k != EXIF_CONTAINER_KEY)
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A user-curated shortcut term
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommonWord {
    pub word: String,
    /// Empty means "no description"
    #[serde(default)]
    pub description: String,
}

impl CommonWord {
    pub fn new(word: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            description: description.into(),
        }
    }

    /// Display label: `word (description)` or just `word`
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            self.word.clone()
        } else {
            format!("{} ({})", self.word, self.description)
        }
    }

    /// Recover the word from a display label (text before the first `" ("`)
    pub fn word_from_label(label: &str) -> &str {
        label.split(" (").next().unwrap_or(label)
    }
}

/// The persisted settings document
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub remembered_folder: String,
    #[serde(default)]
    pub common_words: Vec<CommonWord>,
}

impl Settings {
    /// Display list for the common-word picker
    pub fn common_word_labels(&self) -> Vec<String> {
        self.common_words.iter().map(CommonWord::label).collect()
    }

    /// Append a word (duplicates allowed) and return the updated display list
    pub fn add_common_word(&mut self, word: &str, description: &str) -> Vec<String> {
        self.common_words.push(CommonWord::new(word, description));
        self.common_word_labels()
    }

    /// Remove every entry whose word equals `word` exactly
    pub fn delete_common_word(&mut self, word: &str) -> Vec<String> {
        self.common_words.retain(|cw| cw.word != word);
        self.common_word_labels()
    }
}
