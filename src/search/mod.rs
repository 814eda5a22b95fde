/// Keyword search module
///
/// This module handles:
/// - Turning a keyword string into terms (keywords.rs)
/// - Case folding shared with highlighting (fold.rs)
/// - Selecting the records that match every term (filter.rs)
/// - Splitting the matches into pages (paginate.rs)

pub mod keywords;
pub mod filter;
pub mod fold;
pub mod paginate;

pub use filter::filter_records;
pub use keywords::{insert_common_word, parse_keywords};
pub use paginate::{next_page, page_indicator, paginate, prev_page, total_pages, PageSize};
