use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Identity resolved from a validated bearer token, stored in request
/// extensions for handlers to attribute mutations to.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Bearer-token gate for protected routes.
///
/// All rejections are 401 but the message tells the cases apart: a
/// missing header, a header that is not `Bearer <token>`, and a token
/// that fails validation. The handler never runs on a rejection, and no
/// identity is attached.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.sub,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Authorization token required"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid token format"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid token format"))?;

    if token.is_empty() {
        return Err(unauthorized("Invalid token format"));
    }

    Ok(token)
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}
