//! Request/response surface for the host UI
//!
//! `search` is the whole pipeline over an explicit `Settings` value.
//! `MetadataSearch` wraps it with loading and saving the settings file,
//! one call per UI action.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::metadata::extract_metadata;
use crate::render::{render_message, render_results, RenderOptions};
use crate::search::{filter_records, page_indicator, paginate, parse_keywords, total_pages, PageSize};
use crate::state::data::{CommonWord, ImageRecord, Settings};
use crate::state::settings::SettingsStore;

pub const MSG_FOLDER_NOT_FOUND: &str = "The folder does not exist.";
pub const MSG_NO_QUALIFYING_FILES: &str = "No image files with metadata were found in the folder.";
pub const MSG_NO_MATCHES: &str = "No matching metadata was found.";

/// One search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub folder: PathBuf,
    pub keywords: String,
    /// 1-based; 0 is read as 1
    pub page: usize,
    pub page_size: PageSize,
}

impl SearchQuery {
    pub fn new(folder: impl Into<PathBuf>, keywords: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            keywords: keywords.into(),
            page: 1,
            page_size: PageSize::default(),
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// What a search found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    FolderNotFound,
    /// No image in the folder could be read
    NoQualifyingFiles,
    /// Images were read but none matched every term
    NoMatches,
    Page {
        /// Records on the requested page, possibly empty
        records: Vec<ImageRecord>,
        total_matches: usize,
    },
}

/// Rendered answer handed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub outcome: SearchOutcome,
    pub html: String,
    /// `page/total_pages`
    pub page_indicator: String,
}

impl SearchResponse {
    fn message(outcome: SearchOutcome, message: &str) -> Self {
        Self {
            outcome,
            html: render_message(message),
            page_indicator: page_indicator(1, 1),
        }
    }

    /// Records on the page, empty for the message outcomes
    pub fn records(&self) -> &[ImageRecord] {
        match &self.outcome {
            SearchOutcome::Page { records, .. } => records,
            _ => &[],
        }
    }
}

/// Run the full pipeline: scan, parse, filter, paginate, render.
///
/// When the folder exists it is stored as `remembered_folder`; persisting
/// `settings` is left to the caller.
pub fn search(settings: &mut Settings, query: &SearchQuery, options: &RenderOptions) -> SearchResponse {
    if query.folder.as_os_str().is_empty() || !query.folder.exists() {
        return SearchResponse::message(SearchOutcome::FolderNotFound, MSG_FOLDER_NOT_FOUND);
    }
    settings.remembered_folder = query.folder.to_string_lossy().to_string();

    let records = extract_metadata(&query.folder);
    if records.is_empty() {
        return SearchResponse::message(SearchOutcome::NoQualifyingFiles, MSG_NO_QUALIFYING_FILES);
    }

    let terms = parse_keywords(&query.keywords);
    let matches = filter_records(records, &terms);
    if matches.is_empty() {
        return SearchResponse::message(SearchOutcome::NoMatches, MSG_NO_MATCHES);
    }

    let page = query.page.max(1);
    let total = total_pages(matches.len(), query.page_size);
    let page_records = paginate(&matches, page, query.page_size).to_vec();

    info!(
        "🔍 {} matches for {:?}, showing page {}/{}",
        matches.len(),
        query.keywords,
        page,
        total
    );

    SearchResponse {
        html: render_results(&page_records, &terms, options),
        page_indicator: page_indicator(page, total),
        outcome: SearchOutcome::Page {
            records: page_records,
            total_matches: matches.len(),
        },
    }
}

/// Host-facing entry points, each loading and saving the settings file
#[derive(Debug)]
pub struct MetadataSearch {
    store: SettingsStore,
    options: RenderOptions,
}

impl MetadataSearch {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store,
            options: RenderOptions::default(),
        }
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn settings_path(&self) -> &Path {
        self.store.path()
    }

    /// Search and return `(html, "page/total")` plus the outcome
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let mut settings = self.store.load()?;
        let response = search(&mut settings, query, &self.options);
        if response.outcome != SearchOutcome::FolderNotFound {
            self.store.save(&settings)?;
        }
        Ok(response)
    }

    /// Register a common word; returns the updated display list
    pub fn add_word(&self, word: &str, description: &str) -> Result<Vec<String>> {
        let mut settings = self.store.load()?;
        let labels = settings.add_common_word(word, description);
        self.store.save(&settings)?;
        Ok(labels)
    }

    /// Delete by display label (`word (description)`) or bare word
    pub fn delete_word(&self, selected: &str) -> Result<Vec<String>> {
        let mut settings = self.store.load()?;
        let labels = settings.delete_common_word(CommonWord::word_from_label(selected));
        self.store.save(&settings)?;
        Ok(labels)
    }

    pub fn common_word_labels(&self) -> Result<Vec<String>> {
        Ok(self.store.load()?.common_word_labels())
    }

    /// The folder used by the last successful search, or ""
    pub fn load_last_folder(&self) -> Result<String> {
        Ok(self.store.load()?.remembered_folder)
    }
}
