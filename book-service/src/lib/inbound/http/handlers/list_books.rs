use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::BookResponse;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    state
        .book_service
        .list_books()
        .await
        .map_err(ApiError::from)
        .map(|books| Json(books.iter().map(BookResponse::from).collect()))
}
