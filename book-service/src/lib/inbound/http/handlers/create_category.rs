use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AppJson;
use super::CategoryResponse;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    AppJson(body): AppJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let command = CreateCategoryCommand {
        name: body.name,
        created_by: identity.username,
    };

    state
        .category_service
        .create_category(command)
        .await
        .map_err(ApiError::from)
        .map(|ref category| (StatusCode::CREATED, Json(category.into())))
}

/// HTTP request body for creating a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryRequest {
    name: String,
}
