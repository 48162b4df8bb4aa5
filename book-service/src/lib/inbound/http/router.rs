use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_book::create_book;
use super::handlers::create_category::create_category;
use super::handlers::delete_book::delete_book;
use super::handlers::delete_category::delete_category;
use super::handlers::get_book::get_book;
use super::handlers::get_category::get_category;
use super::handlers::list_books::list_books;
use super::handlers::list_categories::list_categories;
use super::handlers::list_category_books::list_category_books;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_book::update_book;
use super::handlers::update_category::update_category;
use super::middleware::authenticate as auth_middleware;
use crate::domain::book::service::BookService;
use crate::domain::category::service::CategoryService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::book::PostgresBookRepository;
use crate::outbound::repositories::category::PostgresCategoryRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    pub book_service: Arc<BookService<PostgresBookRepository, PostgresCategoryRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login));

    let protected_routes = Router::new()
        .route("/api/books", get(list_books).post(create_book))
        .route(
            "/api/books/:book_id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route(
            "/api/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/api/categories/:category_id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/api/categories/:category_id/books", get(list_category_books))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
