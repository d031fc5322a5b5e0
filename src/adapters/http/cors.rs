use crate::utils::error::HeroError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,PATCH,OPTIONS";
const DEFAULT_ALLOWED_HEADERS: &str = "content-type";

/// Exact-match origin allow-list. Requests carrying any other `Origin` never reach a handler.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Arc<Vec<String>>,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins: Arc::new(allowed_origins),
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

pub async fn cors_middleware(
    State(policy): State<CorsPolicy>,
    req: Request,
    next: Next,
) -> Response {
    let Some(origin_header) = req.headers().get(header::ORIGIN).cloned() else {
        return next.run(req).await;
    };

    let origin = String::from_utf8_lossy(origin_header.as_bytes()).into_owned();
    if !policy.is_allowed(&origin) {
        tracing::warn!(
            "Rejected {} {} from origin {}",
            req.method(),
            req.uri().path(),
            origin
        );
        return HeroError::CorsRejected { origin }.into_response();
    }

    if req.method() == Method::OPTIONS
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
    {
        let requested_headers = req
            .headers()
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_HEADERS));

        let mut resp = StatusCode::NO_CONTENT.into_response();
        let headers = resp.headers_mut();
        apply_origin_headers(headers, origin_header);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested_headers);
        return resp;
    }

    let mut resp = next.run(req).await;
    apply_origin_headers(resp.headers_mut(), origin_header);
    resp
}

fn apply_origin_headers(headers: &mut axum::http::HeaderMap, origin: HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));
}
