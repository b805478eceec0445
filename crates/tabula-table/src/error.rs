use tabula_core::CoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Invalid sort spec or schema problem, raised where the value was set.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any failed page request. Hosts map this to their own "not found".
    #[error("page '{page}' not found: {reason}")]
    PageNotFound { page: String, reason: String },
}

impl TableError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::PageNotFound { .. })
    }
}
