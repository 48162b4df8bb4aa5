use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::Thickness;
use crate::domain::book::ports::BookRepository;
use crate::domain::category::models::CategoryId;

const BOOK_COLUMNS: &str = "id, title, description, image_url, release_year, price, total_page, \
                            thickness, category_id, created_at, created_by, modified_at, modified_by";

#[derive(Debug, FromRow)]
struct BookRow {
    id: i64,
    title: String,
    description: String,
    image_url: String,
    release_year: i32,
    price: i64,
    total_page: i32,
    thickness: String,
    category_id: i64,
    created_at: DateTime<Utc>,
    created_by: Option<String>,
    modified_at: Option<DateTime<Utc>>,
    modified_by: Option<String>,
}

impl BookRow {
    fn into_book(self) -> Result<Book, BookError> {
        // A thickness the domain does not know means the row was written
        // outside this service
        let thickness = self
            .thickness
            .parse::<Thickness>()
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(Book {
            id: BookId(self.id),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            release_year: self.release_year,
            price: self.price,
            total_page: self.total_page,
            thickness,
            category_id: CategoryId(self.category_id),
            created_at: self.created_at,
            created_by: self.created_by,
            modified_at: self.modified_at,
            modified_by: self.modified_by,
        })
    }
}

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, BookError> {
        let draft = &book.draft;

        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            INSERT INTO books
                (title, description, image_url, release_year, price, total_page,
                 thickness, category_id, created_at, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {BOOK_COLUMNS}
            "#,
        ))
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(draft.release_year)
        .bind(draft.price)
        .bind(draft.total_page)
        .bind(draft.thickness.as_str())
        .bind(draft.category_id.0)
        .bind(book.created_at)
        .bind(&book.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Title carries the only unique constraint on books
                if db_err.is_unique_violation() {
                    return BookError::DuplicateTitle(book.draft.title.clone());
                }
            }
            BookError::DatabaseError(e.to_string())
        })?;

        row.into_book()
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        row.map(BookRow::into_book).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(BookRow::into_book).collect()
    }

    async fn list_by_category(&self, category_id: &CategoryId) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE category_id = $1 ORDER BY id"
        ))
        .bind(category_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(BookRow::into_book).collect()
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, description = $3, image_url = $4, release_year = $5,
                price = $6, total_page = $7, thickness = $8, category_id = $9,
                modified_at = $10, modified_by = $11
            WHERE id = $1
            "#,
        )
        .bind(book.id.0)
        .bind(&book.title)
        .bind(&book.description)
        .bind(&book.image_url)
        .bind(book.release_year)
        .bind(book.price)
        .bind(book.total_page)
        .bind(book.thickness.as_str())
        .bind(book.category_id.0)
        .bind(book.modified_at)
        .bind(&book.modified_by)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return BookError::DuplicateTitle(book.title.clone());
                }
            }
            BookError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(book.id.0));
        }

        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(id.0));
        }

        Ok(())
    }
}
