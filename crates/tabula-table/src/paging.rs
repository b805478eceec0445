//! Page adapter: pagination of a table's rows through a paginator factory.
//!
//! The collaborator owns all page arithmetic and validation. Whatever it
//! rejects (zero page size, non-integer or out-of-range page) comes back as
//! [`TableError::PageNotFound`]; its own error type stays behind this module.

use std::ops::Range;

use serde::Serialize;

use tabula_core::config::TableConfig;
use tabula_core::record::RecordSource;
use tabula_page::{PageArg, PageBounds, PageSource, PaginatorConfig, PaginatorFactory};

use crate::error::TableError;
use crate::instance::TableInstance;
use crate::rows::RowSequence;

/// Summary of the paginator used for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagerInfo {
    pub count: usize,
    pub per_page: usize,
    pub num_pages: usize,
}

/// One page of rows: its number, item range, and neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    bounds: PageBounds,
}

impl Page {
    pub fn number(&self) -> usize {
        self.bounds.number
    }

    pub fn total_pages(&self) -> usize {
        self.bounds.num_pages
    }

    /// Positions of this page's rows in the table's row sequence.
    pub fn range(&self) -> Range<usize> {
        self.bounds.start..self.bounds.end
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.bounds.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.bounds.has_next()
    }

    pub fn previous_page_number(&self) -> Option<usize> {
        self.bounds.previous_page_number()
    }

    pub fn next_page_number(&self) -> Option<usize> {
        self.bounds.next_page_number()
    }

    pub fn start_index(&self) -> usize {
        self.bounds.start_index()
    }

    pub fn end_index(&self) -> usize {
        self.bounds.end_index()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Pagination {
    info: PagerInfo,
    page: Page,
}

fn not_found(page: &PageArg, reason: impl ToString) -> TableError {
    TableError::PageNotFound {
        page: page.to_string(),
        reason: reason.to_string(),
    }
}

impl<S: RecordSource + ?Sized> TableInstance<S> {
    /// Paginate the rows with a paginator built by `factory`.
    ///
    /// On success the paginator summary and the page are recorded on the
    /// instance until the next pagination or sort change. On failure the
    /// previously recorded page, if any, is kept.
    pub fn paginate<F: PaginatorFactory>(
        &mut self,
        factory: &F,
        per_page: usize,
        page: impl Into<PageArg>,
    ) -> Result<(F::Paginator, Page), TableError> {
        let page = page.into();
        let count = self.len();

        let paginator = factory
            .create(count, per_page)
            .map_err(|e| self.page_failed(&page, e))?;
        let bounds = paginator
            .page(&page)
            .map_err(|e| self.page_failed(&page, e))?;

        let info = PagerInfo {
            count: paginator.count(),
            per_page: paginator.per_page(),
            num_pages: paginator.num_pages(),
        };
        let current = Page { bounds };
        self.pagination = Some(Pagination {
            info,
            page: current,
        });
        tracing::trace!(
            table = self.schema().name(),
            page = current.number(),
            per_page,
            num_pages = info.num_pages,
            "paginated"
        );
        Ok((paginator, current))
    }

    /// Paginate with the stock paginator and the page size from `cfg`.
    pub fn paginate_with_config(
        &mut self,
        cfg: &TableConfig,
        page: impl Into<PageArg>,
    ) -> Result<Page, TableError> {
        let page = page.into();
        cfg.validate().map_err(|e| self.page_failed(&page, e))?;
        let (_, current) = self.paginate(&PaginatorConfig::from(cfg), cfg.per_page, page)?;
        Ok(current)
    }

    fn page_failed(&self, page: &PageArg, reason: impl std::fmt::Display) -> TableError {
        tracing::debug!(
            table = self.schema().name(),
            page = %page,
            reason = %reason,
            "page not found"
        );
        not_found(page, reason)
    }

    /// Summary of the paginator behind the recorded page.
    pub fn paginator(&self) -> Option<PagerInfo> {
        self.pagination.map(|p| p.info)
    }

    /// The recorded page.
    pub fn page(&self) -> Option<Page> {
        self.pagination.map(|p| p.page)
    }

    /// Rows of the recorded page; `None` before any successful pagination.
    pub fn page_rows(&self) -> Option<RowSequence<'_, S>> {
        let page = self.page()?;
        Some(self.rows().slice(page.range()))
    }
}
