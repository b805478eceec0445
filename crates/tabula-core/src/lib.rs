#![forbid(unsafe_code)]
//! tabula-core: the pure data half of tabula.
//!
//! Holds cell values (`Scalar`), the record access capability, column specs,
//! schema composition across ancestor schemas, sort specs, and the process-wide
//! per-type schema registry. No paging and no row materialization live here;
//! those belong to `tabula-table`.

pub mod column;
pub mod config;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod schema;
pub mod sort;
pub mod types;

pub use column::{Accessor, ColumnSpec};
pub use config::TableConfig;
pub use error::{CoreError, Result};
pub use record::{Record, RecordSource};
pub use registry::{schema_for, TableType};
pub use schema::{compose, SchemaBuilder, TableSchema, VisibleColumns};
pub use sort::{SortDirection, SortKey, SortSpec};
pub use types::Scalar;
