use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginatorError {
    #[error("page size must be positive")]
    ZeroPerPage,

    #[error("page number '{0}' is not an integer")]
    NotAnInteger(String),

    #[error("page number {0} is less than 1")]
    LessThanOne(i64),

    #[error("page {number} contains no results (last page is {num_pages})")]
    EmptyPage { number: i64, num_pages: usize },
}
