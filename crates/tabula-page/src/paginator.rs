//! Stock paginator.

use serde::{Deserialize, Serialize};

use tabula_core::config::TableConfig;

use crate::error::PaginatorError;
use crate::traits::{PageArg, PageBounds, PageSource, PaginatorFactory};

/// Options shared by every paginator a factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorConfig {
    pub orphans: usize,
    pub allow_empty_first_page: bool,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            orphans: 0,
            allow_empty_first_page: true,
        }
    }
}

impl From<&TableConfig> for PaginatorConfig {
    fn from(cfg: &TableConfig) -> Self {
        Self {
            orphans: cfg.orphans,
            allow_empty_first_page: cfg.allow_empty_first_page,
        }
    }
}

impl PaginatorFactory for PaginatorConfig {
    type Paginator = Paginator;

    fn create(&self, count: usize, per_page: usize) -> Result<Paginator, PaginatorError> {
        Paginator::with_config(count, per_page, *self)
    }
}

/// Splits `count` items into pages of `per_page`.
///
/// With `orphans > 0`, a last page that would hold `orphans` items or fewer is
/// folded into the page before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginator {
    count: usize,
    per_page: usize,
    config: PaginatorConfig,
}

impl Paginator {
    pub fn new(count: usize, per_page: usize) -> Result<Self, PaginatorError> {
        Self::with_config(count, per_page, PaginatorConfig::default())
    }

    pub fn with_config(
        count: usize,
        per_page: usize,
        config: PaginatorConfig,
    ) -> Result<Self, PaginatorError> {
        if per_page == 0 {
            return Err(PaginatorError::ZeroPerPage);
        }
        Ok(Self {
            count,
            per_page,
            config,
        })
    }

    /// Factory with default options, for `table.paginate(&Paginator::factory(), ..)`.
    pub fn factory() -> PaginatorConfig {
        PaginatorConfig::default()
    }

    /// Parse and range-check a page number.
    pub fn validate_number(&self, number: &PageArg) -> Result<usize, PaginatorError> {
        let n = match number {
            PageArg::Number(n) => *n,
            PageArg::Raw(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| PaginatorError::NotAnInteger(s.clone()))?,
        };
        if n < 1 {
            return Err(PaginatorError::LessThanOne(n));
        }
        let num_pages = self.num_pages();
        let in_range = usize::try_from(n).map(|u| u <= num_pages).unwrap_or(false);
        if !in_range && !(n == 1 && self.config.allow_empty_first_page) {
            return Err(PaginatorError::EmptyPage {
                number: n,
                num_pages,
            });
        }
        // In range, or page 1 of an empty sequence; both fit in usize.
        Ok(usize::try_from(n).unwrap_or(1))
    }
}

impl PageSource for Paginator {
    type Error = PaginatorError;

    fn count(&self) -> usize {
        self.count
    }

    fn per_page(&self) -> usize {
        self.per_page
    }

    fn num_pages(&self) -> usize {
        if self.count == 0 && !self.config.allow_empty_first_page {
            return 0;
        }
        let hits = self.count.saturating_sub(self.config.orphans).max(1);
        hits.div_ceil(self.per_page)
    }

    fn page(&self, number: &PageArg) -> Result<PageBounds, PaginatorError> {
        let number = self.validate_number(number)?;
        let start = ((number - 1) * self.per_page).min(self.count);
        let mut end = start.saturating_add(self.per_page);
        if end.saturating_add(self.config.orphans) >= self.count {
            end = self.count;
        }
        Ok(PageBounds {
            number,
            start,
            end,
            num_pages: self.num_pages(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_items_ten_per_page() {
        let p = Paginator::new(100, 10).unwrap();
        assert_eq!(p.num_pages(), 10);
        let first = p.page(&1.into()).unwrap();
        assert_eq!(first.len(), 10);
        assert!(!first.has_previous());
        assert!(first.has_next());
        let last = p.page(&"10".into()).unwrap();
        assert_eq!((last.start, last.end), (90, 100));
        assert!(!last.has_next());
    }

    #[test]
    fn invalid_numbers() {
        let p = Paginator::new(100, 10).unwrap();
        assert_eq!(
            p.page(&"abc".into()).unwrap_err(),
            PaginatorError::NotAnInteger("abc".into())
        );
        assert_eq!(p.page(&0.into()).unwrap_err(), PaginatorError::LessThanOne(0));
        assert_eq!(
            p.page(&9999.into()).unwrap_err(),
            PaginatorError::EmptyPage {
                number: 9999,
                num_pages: 10
            }
        );
    }

    #[test]
    fn zero_per_page_is_rejected() {
        assert_eq!(Paginator::new(5, 0).unwrap_err(), PaginatorError::ZeroPerPage);
    }

    #[test]
    fn orphans_fold_into_last_page() {
        let cfg = PaginatorConfig {
            orphans: 3,
            ..PaginatorConfig::default()
        };
        let p = cfg.create(23, 10).unwrap();
        assert_eq!(p.num_pages(), 2);
        let last = p.page(&2.into()).unwrap();
        assert_eq!((last.start, last.end), (10, 23));
    }

    #[test]
    fn huge_orphans_and_page_size_do_not_overflow() {
        let cfg = PaginatorConfig {
            orphans: usize::MAX,
            ..PaginatorConfig::default()
        };
        let p = cfg.create(42, 10).unwrap();
        assert_eq!(p.num_pages(), 1);
        let only = p.page(&1.into()).unwrap();
        assert_eq!((only.start, only.end), (0, 42));

        let wide = Paginator::new(42, usize::MAX).unwrap();
        let only = wide.page(&1.into()).unwrap();
        assert_eq!((only.start, only.end), (0, 42));
    }

    #[test]
    fn empty_first_page() {
        let p = Paginator::new(0, 10).unwrap();
        assert_eq!(p.num_pages(), 1);
        let page = p.page(&1.into()).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.start_index(), 0);

        let strict = Paginator::with_config(
            0,
            10,
            PaginatorConfig {
                orphans: 0,
                allow_empty_first_page: false,
            },
        )
        .unwrap();
        assert_eq!(strict.num_pages(), 0);
        assert!(strict.page(&1.into()).is_err());
    }

    #[test]
    fn config_comes_from_table_config() {
        let table_cfg = TableConfig {
            orphans: 2,
            allow_empty_first_page: false,
            ..TableConfig::default()
        };
        let cfg = PaginatorConfig::from(&table_cfg);
        assert_eq!(cfg.orphans, 2);
        assert!(!cfg.allow_empty_first_page);
    }
}
