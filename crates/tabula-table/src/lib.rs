#![forbid(unsafe_code)]
//! tabula-table: table instances over in-memory records.
//!
//! A [`TableInstance`] binds one cached schema to one record source and one
//! sort spec. Rows are sorted lazily, on first access, and the permutation is
//! kept until the sort spec is reassigned. Pagination goes through the
//! collaborator traits of `tabula-page`; any failure there comes back as
//! [`TableError::PageNotFound`].
//!
//! Instances are single-threaded: the row cache is an unsynchronized cell.
//! Share the schema and source by `Arc` and build one instance per thread.

pub mod error;
pub mod instance;
pub mod paging;
pub mod rows;

pub use error::TableError;
pub use instance::TableInstance;
pub use paging::{Page, PagerInfo};
pub use rows::{Row, RowSequence, Rows};
