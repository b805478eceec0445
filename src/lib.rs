#![forbid(unsafe_code)]
//! tabula: declarative tables over in-memory records.
//!
//! Declare a table type once (own columns plus ancestor schemas), bind it to a
//! record source, and read a stably sorted, cached, pageable row sequence.
//!
//! - [`tabula_core`]: values, records, columns, schema composition, sort specs
//! - [`tabula_page`]: the paginator collaborator
//! - [`tabula_table`]: table instances, row sequences, pagination

pub use tabula_core;
pub use tabula_page;
pub use tabula_table;

pub mod prelude {
    pub use tabula_core::prelude::*;
    pub use tabula_page::{PageArg, PageSource, Paginator, PaginatorConfig, PaginatorFactory};
    pub use tabula_table::{Page, PagerInfo, Row, RowSequence, TableError, TableInstance};
}
