//! Reverse proxy for the backend REST API.
//!
//! The browser only ever talks to its own origin; every `/api/...` request
//! is forwarded to the configured upstream with method, query, body, and the
//! auth header intact. Fire-once: no retries, no caching. Connection
//! failures surface as 502 with the same `{"detail": ...}` error shape the
//! backend uses.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;

/// Shared proxy state: one pooled client and the upstream base URL.
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    pub fn new(upstream: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream,
        }
    }
}

/// Build the `/api/{*path}` router.
pub fn api_proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy_handler))
        .with_state(state)
}

/// Compose the upstream URL from the stripped path and original query.
fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) => format!("{upstream}/{path}?{q}"),
        None => format!("{upstream}/{path}"),
    }
}

async fn proxy_handler(
    State(state): State<ProxyState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.upstream, &path, uri.query());

    let mut req = state.client.request(method, &url);
    for name in [header::AUTHORIZATION, header::CONTENT_TYPE] {
        if let Some(value) = headers.get(&name) {
            req = req.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        req = req.body(body);
    }

    match req.send().await {
        Ok(resp) => {
            let status = resp.status();
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("application/json")
                .to_string();
            match resp.bytes().await {
                Ok(bytes) => {
                    (status, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
                }
                Err(err) => {
                    tracing::warn!("failed to read upstream response body: {err}");
                    bad_gateway()
                }
            }
        }
        Err(err) => {
            tracing::warn!("upstream request to {url} failed: {err}");
            bad_gateway()
        }
    }
}

fn bad_gateway() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        [(header::CONTENT_TYPE, "application/json")],
        r#"{"detail":"Backend is unreachable"}"#,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::upstream_url;

    #[test]
    fn test_upstream_url_without_query() {
        assert_eq!(
            upstream_url("http://127.0.0.1:8000", "auth/login", None),
            "http://127.0.0.1:8000/auth/login"
        );
    }

    #[test]
    fn test_upstream_url_with_query() {
        assert_eq!(
            upstream_url(
                "http://127.0.0.1:8000",
                "employers/my-internships",
                Some("limit=10")
            ),
            "http://127.0.0.1:8000/employers/my-internships?limit=10"
        );
    }
}
