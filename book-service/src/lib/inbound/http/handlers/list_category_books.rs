use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::BookResponse;
use crate::domain::book::ports::BookServicePort;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::router::AppState;

/// Lists the books referencing a category. An unknown category yields an
/// empty list rather than a 404.
pub async fn list_category_books(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let category_id =
        CategoryId::from_string(&category_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .book_service
        .list_books_by_category(&category_id)
        .await
        .map_err(ApiError::from)
        .map(|books| Json(books.iter().map(BookResponse::from).collect()))
}
