use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::category::models::CategoryId;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// List every book.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Create a book from an already-validated draft.
    ///
    /// # Errors
    /// * `DanglingCategory` - the draft references a category that does not exist
    /// * `DuplicateTitle` - the title is already taken
    /// * `DatabaseError` - database operation failed
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    /// Retrieve a book by identifier.
    ///
    /// # Errors
    /// * `NotFound` - book does not exist
    /// * `DatabaseError` - database operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Replace every client-settable field of an existing book.
    ///
    /// # Errors
    /// * `NotFound` - book does not exist
    /// * `DanglingCategory` - the draft references a category that does not exist
    /// * `DuplicateTitle` - the new title is already taken
    /// * `DatabaseError` - database operation failed
    async fn update_book(&self, id: &BookId, command: UpdateBookCommand)
        -> Result<Book, BookError>;

    /// Delete a book.
    ///
    /// # Errors
    /// * `NotFound` - book does not exist
    /// * `DatabaseError` - database operation failed
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;

    /// List the books referencing a category.
    ///
    /// An unknown category yields an empty list, not an error.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn list_books_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Book>, BookError>;
}

/// Persistence operations for the book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist a new book; the store assigns the ID.
    ///
    /// # Errors
    /// * `DuplicateTitle` - the unique constraint on title fired
    /// * `DatabaseError` - database operation failed
    async fn create(&self, book: NewBook) -> Result<Book, BookError>;

    /// Retrieve a book by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Retrieve all books.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve all books referencing a category.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn list_by_category(&self, category_id: &CategoryId) -> Result<Vec<Book>, BookError>;

    /// Update an existing book row.
    ///
    /// # Errors
    /// * `NotFound` - no row with this ID
    /// * `DuplicateTitle` - the unique constraint on title fired
    /// * `DatabaseError` - database operation failed
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// Remove a book row.
    ///
    /// # Errors
    /// * `NotFound` - no row with this ID
    /// * `DatabaseError` - database operation failed
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
