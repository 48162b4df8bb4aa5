use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AppJson;
use super::BookResponse;
use crate::domain::book::models::BookDraft;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::ports::BookServicePort;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    AppJson(body): AppJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let command = CreateBookCommand {
        draft: body.try_into_draft()?,
        created_by: identity.username,
    };

    state
        .book_service
        .create_book(command)
        .await
        .map_err(ApiError::from)
        .map(|ref book| (StatusCode::CREATED, Json(book.into())))
}

/// HTTP request body for creating a book (raw JSON).
///
/// There is deliberately no `thickness` field: a client-supplied value is
/// dropped as an unknown key and the draft derives it from `total_page`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    description: String,
    image_url: String,
    release_year: i32,
    price: i64,
    total_page: i32,
    category_id: i64,
}

impl CreateBookRequest {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::models::Thickness;

    #[test]
    fn test_client_supplied_thickness_is_discarded() {
        // 80 pages is thin regardless of what the client claims
        let body: CreateBookRequest = serde_json::from_value(serde_json::json!({
            "title": "Dune",
            "description": "Desert planet epic",
            "image_url": "https://example.com/dune.jpg",
            "release_year": 1990,
            "price": 4999,
            "total_page": 80,
            "category_id": 1,
            "thickness": "thick"
        }))
        .unwrap();

        let draft = body.try_into_draft().unwrap();
        assert_eq!(draft.thickness, Thickness::Thin);
    }

    #[test]
    fn test_out_of_range_year_is_bad_request() {
        let body: CreateBookRequest = serde_json::from_value(serde_json::json!({
            "title": "Dune",
            "description": "Desert planet epic",
            "image_url": "https://example.com/dune.jpg",
            "release_year": 1979,
            "price": 4999,
            "total_page": 80,
            "category_id": 1
        }))
        .unwrap();

        assert!(matches!(
            body.try_into_draft(),
            Err(ApiError::BadRequest(_))
        ));
    }
}
