use std::sync::LazyLock;

use regex::Regex;

use crate::state::data::CommonWord;

static QUOTED_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(.*?)""#).expect("quoted phrase pattern is valid")
});

/// Split a keyword string into search terms.
///
/// Double-quoted spans become single terms (quotes removed) and come
/// first, followed by the whitespace-separated tokens of what is left.
/// `""` produces an empty term.
pub fn parse_keywords(keywords: &str) -> Vec<String> {
    let mut terms: Vec<String> = QUOTED_PHRASE
        .captures_iter(keywords)
        .map(|caps| caps[1].to_string())
        .collect();

    let remaining = QUOTED_PHRASE.replace_all(keywords, "");
    terms.extend(remaining.split_whitespace().map(str::to_string));
    terms
}

/// Append a picked common word to the keyword string.
///
/// `selected` may be a display label; the description part is dropped.
/// Words containing a space are quoted so they stay one term.
pub fn insert_common_word(current: &str, selected: &str) -> String {
    if selected.is_empty() {
        return current.to_string();
    }

    let word = CommonWord::word_from_label(selected);
    let word = if word.contains(' ') && !(word.starts_with('"') && word.ends_with('"')) {
        format!("\"{}\"", word)
    } else {
        word.to_string()
    };

    if current.is_empty() {
        word
    } else {
        format!("{} {}", current, word)
    }
}
