use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::category::models::CategoryId;
use crate::domain::category::ports::CategoryRepository;

/// Domain service implementation for book operations.
///
/// Field-range checks and the derived thickness live on `BookDraft`;
/// this service adds the checks that need storage: the category
/// referential check and the target-existence check on update.
pub struct BookService<BR, CR>
where
    BR: BookRepository,
    CR: CategoryRepository,
{
    books: Arc<BR>,
    categories: Arc<CR>,
}

impl<BR, CR> BookService<BR, CR>
where
    BR: BookRepository,
    CR: CategoryRepository,
{
    pub fn new(books: Arc<BR>, categories: Arc<CR>) -> Self {
        Self { books, categories }
    }

    /// The check and the subsequent write are separate statements; a
    /// category deleted in between is caught by the schema's foreign key.
    async fn ensure_category_exists(&self, category_id: &CategoryId) -> Result<(), BookError> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        match category {
            Some(_) => Ok(()),
            None => Err(BookError::DanglingCategory(category_id.0)),
        }
    }
}

#[async_trait]
impl<BR, CR> BookServicePort for BookService<BR, CR>
where
    BR: BookRepository,
    CR: CategoryRepository,
{
    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.books.list_all().await
    }

    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        self.ensure_category_exists(&command.draft.category_id).await?;

        let book = NewBook {
            draft: command.draft,
            created_at: Utc::now(),
            created_by: Some(command.created_by),
        };

        self.books.create(book).await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.books
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.0))
    }

    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        let mut book = self
            .books
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.0))?;

        self.ensure_category_exists(&command.draft.category_id).await?;

        let draft = command.draft;
        book.title = draft.title;
        book.description = draft.description;
        book.image_url = draft.image_url;
        book.release_year = draft.release_year;
        book.price = draft.price;
        book.total_page = draft.total_page;
        book.thickness = draft.thickness;
        book.category_id = draft.category_id;
        book.modified_at = Some(Utc::now());
        book.modified_by = Some(command.modified_by);

        self.books.update(book).await
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), BookError> {
        self.books.delete(id).await
    }

    async fn list_books_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Book>, BookError> {
        self.books.list_by_category(category_id).await
    }
}
