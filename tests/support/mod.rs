// tests/support/mod.rs
// Shared harness for the integration test binaries. Some helpers are unused
// in individual test crates; silence the resulting dead_code noise here.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use axum::Router;
use axum::body::{self, Body};
use axum::http::Response;
use blog_gateway::application::services::ApplicationServices;
use blog_gateway::domain::article::ArticleRepository;
use blog_gateway::presentation::http::{cors::CorsPolicy, routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const ALLOWED_ORIGIN: &str = "https://allowed.example";

/// Build the full router over a stub repository, with a one-entry CORS
/// allow-list.
pub fn make_test_router<R: ArticleRepository + 'static>(repo: Arc<R>) -> Router {
    let state = HttpState {
        services: Arc::new(ApplicationServices::new(repo)),
        cors: Arc::new(CorsPolicy::new(vec![ALLOWED_ORIGIN.to_string()])),
    };
    build_router(state)
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
