use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AppJson;
use super::BookResponse;
use crate::domain::book::models::BookDraft;
use crate::domain::book::models::BookId;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookServicePort;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a book (raw JSON).
///
/// Full replacement: every client-settable field is required, thickness is
/// recomputed from the new page count.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBookRequest {
    title: String,
    description: String,
    image_url: String,
    release_year: i32,
    price: i64,
    total_page: i32,
    category_id: i64,
}

impl UpdateBookRequest {
    fn try_into_draft(self) -> Result<BookDraft, ApiError> {
        BookDraft::new(
            self.title,
            self.description,
            self.image_url,
            self.release_year,
            self.price,
            self.total_page,
            CategoryId(self.category_id),
        )
        .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Extension(identity): Extension<AuthenticatedUser>,
    AppJson(body): AppJson<UpdateBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = UpdateBookCommand {
        draft: body.try_into_draft()?,
        modified_by: identity.username,
    };

    state
        .book_service
        .update_book(&book_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref book| Json(book.into()))
}
