use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of results shown per page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Sizes offered to the user
    pub const OPTIONS: [u32; 4] = [10, 20, 50, 100];

    pub fn new(size: u32) -> Result<Self, Error> {
        if Self::OPTIONS.contains(&size) {
            Ok(Self(size))
        } else {
            Err(Error::InvalidPageSize(size))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(20)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = Error;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl FromStr for PageSize {
    type Err = Error;

    /// Blank input falls back to the default size
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        let size = s
            .parse::<u32>()
            .map_err(|_| Error::PageSizeNotNumeric(s.to_string()))?;
        Self::new(size)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pages needed for `count` items, never less than one
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// Slice out 1-based `page`. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// `page/total` as shown next to the results
pub fn page_indicator(page: usize, total: usize) -> String {
    format!("{}/{}", page, total)
}

pub fn next_page(page: usize) -> usize {
    page.saturating_add(1)
}

pub fn prev_page(page: usize) -> usize {
    page.saturating_sub(1).max(1)
}
