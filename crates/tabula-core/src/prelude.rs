//! Convenient re-exports for downstream crates.

pub use crate::column::{Accessor, ColumnSpec};
pub use crate::config::TableConfig;
pub use crate::error::{CoreError, Result};
pub use crate::record::{Record, RecordSource};
pub use crate::registry::{schema_for, TableType};
pub use crate::schema::{SchemaBuilder, TableSchema, VisibleColumns};
pub use crate::sort::{SortDirection, SortKey, SortSpec};
pub use crate::types::Scalar;
