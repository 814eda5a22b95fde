use super::fold::fold_case;
use crate::state::data::ImageRecord;

/// Check a single record against every term.
///
/// Each term must occur (case-insensitively) in the metadata blob or in
/// the folder path. `terms_folded` must already be passed through
/// `fold_case`. No terms means everything matches.
pub fn matches_all(record: &ImageRecord, terms_folded: &[String]) -> bool {
    let metadata = fold_case(&record.metadata_text);
    let folder = fold_case(&record.folder_path);
    terms_folded
        .iter()
        .all(|term| metadata.contains(term.as_str()) || folder.contains(term.as_str()))
}

/// Keep the records matching every term, preserving scan order
pub fn filter_records(records: Vec<ImageRecord>, terms: &[String]) -> Vec<ImageRecord> {
    let terms_folded: Vec<String> = terms.iter().map(|t| fold_case(t)).collect();
    records
        .into_iter()
        .filter(|record| matches_all(record, &terms_folded))
        .collect()
}
