use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Immutable per-deployment CORS allow-list. The allowed origin is echoed
/// back only on an exact match; there is no wildcard fallback.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    pub fn echo_origin<'a>(&self, origin: Option<&'a str>) -> Option<&'a str> {
        origin.filter(|origin| self.allowed_origins.iter().any(|allowed| allowed == origin))
    }
}

/// Router-wide layer: short-circuits preflight probes with a 204 before any
/// routing happens, and stamps the CORS headers onto every other response.
pub async fn apply(State(state): State<HttpState>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let echo = state
        .cors
        .echo_origin(origin.as_deref())
        .map(str::to_owned);

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        attach_headers(response.headers_mut(), echo.as_deref());
        return response;
    }

    let mut response = next.run(request).await;
    attach_headers(response.headers_mut(), echo.as_deref());
    response
}

fn attach_headers(headers: &mut HeaderMap, origin: Option<&str>) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    if let Some(origin) = origin
        && let Ok(value) = HeaderValue::from_str(origin)
    {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
}
