//! Permissive CORS response headers.
//!
//! The shorten endpoint is called directly from browser clients hosted on a
//! different origin than the static redirect host, so every response —
//! success and error alike — must carry the permissive cross-origin headers.

use axum::{
    extract::Request,
    http::HeaderValue,
    http::header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    },
    middleware::Next,
    response::Response,
};

/// Stamps the three permissive CORS headers onto every response.
///
/// Applied at the router level so error responses produced by handlers and
/// extractors are covered as well.
pub async fn layer(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let allow_all = HeaderValue::from_static("*");
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, allow_all.clone());
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, allow_all.clone());
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, allow_all);

    response
}
