// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::cors;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{Json, Router, http::Method, middleware, routing::get};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/articles", get(articles::list_articles))
        // Wildcard so slugs containing `/` still resolve; axum decodes
        // percent-escapes in the captured remainder.
        .route("/articles/{*slug}", get(articles::get_article_by_slug))
        .route("/recent", get(articles::recent_articles))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(state.clone(), cors::apply))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: String,
    pub endpoints: Value,
    pub version: String,
}

pub async fn index() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Hygraph Blog API".into(),
        endpoints: json!({
            "GET /articles": "Get all articles (supports orderBy, limit, skip query params)",
            "GET /articles/{slug}": "Get article by slug",
            "GET /recent": "Get recent articles (supports limit query param)",
        }),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// The method check comes before path matching: a write method on an
/// unknown path is still a 405, never a 404.
async fn not_found(method: Method) -> HttpError {
    if method == Method::GET {
        HttpError::not_found("Endpoint not found")
    } else {
        HttpError::method_not_allowed("Method not allowed")
    }
}

async fn method_not_allowed() -> HttpError {
    HttpError::method_not_allowed("Method not allowed")
}
