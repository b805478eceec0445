//! Collaborator traits and the values crossing them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A page number as the host received it.
///
/// Query strings deliver text, so a page argument may not even be a number;
/// deciding that is the paginator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageArg {
    Number(i64),
    Raw(String),
}

impl fmt::Display for PageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageArg::Number(n) => write!(f, "{n}"),
            PageArg::Raw(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PageArg {
    fn from(n: i64) -> Self {
        PageArg::Number(n)
    }
}

impl From<i32> for PageArg {
    fn from(n: i32) -> Self {
        PageArg::Number(i64::from(n))
    }
}

impl From<u32> for PageArg {
    fn from(n: u32) -> Self {
        PageArg::Number(i64::from(n))
    }
}

impl From<usize> for PageArg {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(n) => PageArg::Number(n),
            Err(_) => PageArg::Raw(n.to_string()),
        }
    }
}

impl From<&str> for PageArg {
    fn from(s: &str) -> Self {
        PageArg::Raw(s.to_string())
    }
}

impl From<String> for PageArg {
    fn from(s: String) -> Self {
        PageArg::Raw(s)
    }
}

/// Position of one page inside a sequence of `count` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBounds {
    /// 1-based page number.
    pub number: usize,
    /// Item range `start..end` (0-based, end exclusive).
    pub start: usize,
    pub end: usize,
    pub num_pages: usize,
}

impl PageBounds {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_page_number(&self) -> Option<usize> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_page_number(&self) -> Option<usize> {
        self.has_next().then(|| self.number + 1)
    }

    /// 1-based position of the first item; 0 for an empty page.
    pub fn start_index(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.start + 1
        }
    }

    /// 1-based position of the last item; 0 for an empty page.
    pub fn end_index(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end
        }
    }
}

/// A paginator bound to a fixed item count and page size.
pub trait PageSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn count(&self) -> usize;

    fn per_page(&self) -> usize;

    fn num_pages(&self) -> usize;

    /// Bounds of page `number`, or an error if it is not a valid page.
    fn page(&self, number: &PageArg) -> Result<PageBounds, Self::Error>;
}

/// Builds a [`PageSource`] for `count` items split `per_page` at a time.
pub trait PaginatorFactory {
    type Paginator: PageSource;

    fn create(
        &self,
        count: usize,
        per_page: usize,
    ) -> Result<Self::Paginator, <Self::Paginator as PageSource>::Error>;
}

impl<F, P> PaginatorFactory for F
where
    F: Fn(usize, usize) -> Result<P, <P as PageSource>::Error>,
    P: PageSource,
{
    type Paginator = P;

    fn create(&self, count: usize, per_page: usize) -> Result<P, <P as PageSource>::Error> {
        self(count, per_page)
    }
}
