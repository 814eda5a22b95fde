//! Case folding shared by filtering and highlighting
//!
//! Both sides fold text one char at a time, so a record that passes the
//! filter for a term always shows at least one highlight for it.

/// Fold one char. Final sigma folds like medial sigma.
fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().map(|c| if c == 'ς' { 'σ' } else { c })
}

/// Case-folded copy of `text`
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// Byte ranges of `text` whose folded form matches the folded `needle`.
///
/// Matches are found left to right without overlap in folded text. Each
/// range covers whole chars of `text`, so a char that folds to several
/// chars is emphasized entirely even when only part of it matched.
pub fn find_folded_matches(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle = fold_case(needle);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut folded = String::with_capacity(text.len());
    // Source char span for every byte of `folded`
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let span = (start, start + ch.len_utf8());
        for lower in fold_char(ch) {
            folded.push(lower);
            origin.resize(folded.len(), span);
        }
    }

    folded
        .match_indices(needle.as_str())
        .map(|(at, m)| (origin[at].0, origin[at + m.len() - 1].1))
        .collect()
}
