use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AppJson;
use super::CategoryResponse;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for renaming a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryRequest {
    name: String,
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Extension(identity): Extension<AuthenticatedUser>,
    AppJson(body): AppJson<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category_id =
        CategoryId::from_string(&category_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = UpdateCategoryCommand {
        name: body.name,
        modified_by: identity.username,
    };

    state
        .category_service
        .update_category(&category_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref category| Json(category.into()))
}
