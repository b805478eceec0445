use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid column name '{0}': names must be non-empty and must not start with '-'")]
    InvalidColumnName(String),

    #[error("sort key '{key}' does not name a column of table '{table}'")]
    UnknownSortColumn { table: String, key: String },

    #[error("column '{column}' of table '{table}' is not sortable")]
    UnsortableColumn { table: String, column: String },

    #[error("schema for '{0}' is already registered with different columns")]
    RegistryConflict(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("hashing error: {0}")]
    Hash(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Hash(e.to_string())
    }
}
