use thiserror::Error;

/// Error for CategoryId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryIdError {
    #[error("Invalid category ID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for category operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("Invalid category ID: {0}")]
    InvalidCategoryId(#[from] CategoryIdError),

    #[error("Category not found: {0}")]
    NotFound(i64),

    #[error("Category {0} is still referenced by books")]
    StillReferenced(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
