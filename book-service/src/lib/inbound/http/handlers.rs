use axum::async_trait;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::Thickness;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::user::errors::UserError;

pub mod create_book;
pub mod create_category;
pub mod delete_book;
pub mod delete_category;
pub mod get_book;
pub mod get_category;
pub mod list_books;
pub mod list_categories;
pub mod list_category_books;
pub mod login;
pub mod register;
pub mod update_book;
pub mod update_category;

/// Message returned for every unknown-username / wrong-password login
/// failure, so responses cannot be used to enumerate accounts.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// API error with the HTTP status it maps to.
///
/// Every client-visible failure renders as `{"error": <message>}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError(msg) => {
                // Log the detail, never send it to the client
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_) | UserError::InvalidUsername(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::NotFoundByUsername(_) | UserError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::HashingFailed(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::InvalidBookId(_)
            | BookError::Validation(_)
            | BookError::DanglingCategory(_) => ApiError::BadRequest(err.to_string()),
            BookError::DuplicateTitle(_) => ApiError::Conflict(err.to_string()),
            BookError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BookError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::InvalidCategoryId(_) => ApiError::BadRequest(err.to_string()),
            CategoryError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CategoryError::StillReferenced(_) => ApiError::Conflict(err.to_string()),
            CategoryError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// `axum::Json` replacement whose rejection keeps the service's error
/// body shape instead of axum's plain-text responses.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

/// Wire representation of a book.
///
/// Nullable audit actor columns flatten to the empty string here, at the
/// serialization boundary only; the domain keeps them as options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i64,
    pub total_page: i32,
    pub thickness: Thickness,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: String,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            title: book.title.clone(),
            description: book.description.clone(),
            image_url: book.image_url.clone(),
            release_year: book.release_year,
            price: book.price,
            total_page: book.total_page,
            thickness: book.thickness,
            category_id: book.category_id.0,
            created_at: book.created_at,
            created_by: book.created_by.clone().unwrap_or_default(),
            modified_at: book.modified_at,
            modified_by: book.modified_by.clone().unwrap_or_default(),
        }
    }
}

/// Wire representation of a category, same flattening rule as books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: String,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.0,
            name: category.name.clone(),
            created_at: category.created_at,
            created_by: category.created_by.clone().unwrap_or_default(),
            modified_at: category.modified_at,
            modified_by: category.modified_by.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::models::BookId;
    use crate::domain::category::models::CategoryId;

    #[test]
    fn test_book_response_flattens_absent_audit_actors() {
        let book = Book {
            id: BookId(1),
            title: "Dune".to_string(),
            description: "Desert planet epic".to_string(),
            image_url: "https://example.com/dune.jpg".to_string(),
            release_year: 1990,
            price: 4999,
            total_page: 412,
            thickness: Thickness::Thick,
            category_id: CategoryId(1),
            created_at: Utc::now(),
            created_by: None,
            modified_at: None,
            modified_by: None,
        };

        let body = serde_json::to_value(BookResponse::from(&book)).unwrap();
        assert_eq!(body["created_by"], "");
        assert_eq!(body["modified_by"], "");
        assert_eq!(body["modified_at"], serde_json::Value::Null);
        assert_eq!(body["thickness"], "thick");
    }

    #[test]
    fn test_error_status_mapping() {
        let conflict = ApiError::from(BookError::DuplicateTitle("Dune".to_string()));
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);

        let dangling = ApiError::from(BookError::DanglingCategory(9));
        assert_eq!(dangling.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = ApiError::from(BookError::NotFound(1));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let referenced = ApiError::from(CategoryError::StillReferenced(2));
        assert_eq!(referenced.into_response().status(), StatusCode::CONFLICT);

        let taken = ApiError::from(UserError::UsernameAlreadyExists("alice".to_string()));
        assert_eq!(taken.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_category_response_keeps_present_audit_actors() {
        let category = Category {
            id: CategoryId(2),
            name: "Fiction".to_string(),
            created_at: Utc::now(),
            created_by: Some("alice".to_string()),
            modified_at: None,
            modified_by: None,
        };

        let body = serde_json::to_value(CategoryResponse::from(&category)).unwrap();
        assert_eq!(body["created_by"], "alice");
        assert_eq!(body["modified_by"], "");
    }
}
