#![forbid(unsafe_code)]
//! tabula-page: the page-slicing collaborator.
//!
//! Tables never do page arithmetic themselves. They hand a row count and a
//! page size to a [`PaginatorFactory`] and ask the resulting [`PageSource`]
//! for the bounds of one page. [`Paginator`] is the stock implementation, with
//! orphan folding and an optional empty first page.

pub mod error;
pub mod paginator;
pub mod traits;

pub use error::PaginatorError;
pub use paginator::{Paginator, PaginatorConfig};
pub use traits::{PageArg, PageBounds, PageSource, PaginatorFactory};
