use thiserror::Error;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid book ID format: {0}")]
    InvalidFormat(String),
}

/// Error for a stored thickness value that is neither `thick` nor `thin`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown thickness value: {0}")]
pub struct ParseThicknessError(pub String);

/// Field-range violations on a book mutation payload
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookValidationError {
    #[error("Release year must be between {min} and {max}, got {actual}")]
    ReleaseYearOutOfRange { min: i32, max: i32, actual: i32 },

    #[error("Price must not be negative, got {0}")]
    NegativePrice(i64),

    #[error("Total page count must be positive, got {0}")]
    NonPositivePageCount(i32),
}

/// Top-level error for book operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book ID: {0}")]
    InvalidBookId(#[from] BookIdError),

    #[error("Invalid book: {0}")]
    Validation(#[from] BookValidationError),

    #[error("Unknown category ID: {0}")]
    DanglingCategory(i64),

    #[error("Book title already exists: {0}")]
    DuplicateTitle(String),

    #[error("Book not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
