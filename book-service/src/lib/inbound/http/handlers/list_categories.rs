use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::CategoryResponse;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    state
        .category_service
        .list_categories()
        .await
        .map_err(ApiError::from)
        .map(|categories| Json(categories.iter().map(CategoryResponse::from).collect()))
}
