//! Absolute URL of the current request
//!
//! Pagination links are built from the URL the client actually called.
//! Behind a proxy that is `X-Forwarded-Proto` + `Host`; when no `Host`
//! header was sent the configured public host is used instead. Only
//! `http` and `https` are accepted as scheme.

use axum::http::{header, HeaderMap, Uri};
use url::Url;

use crate::shared::AppError;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Rebuild the absolute URL of a request.
///
/// `uri` must be the original URI (before nested routers strip their
/// prefix), so handlers pass `OriginalUri`.
pub fn request_url(uri: &Uri, headers: &HeaderMap, fallback_host: &str) -> Result<Url, AppError> {
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .and_then(web_scheme)
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or(fallback_host);

    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    let raw = format!("{scheme}://{host}{path_and_query}");
    Url::parse(&raw).map_err(|e| {
        AppError::bad_request("Invalid request URL")
            .with_context(raw)
            .with_cause(e)
    })
}

fn web_scheme(proto: &str) -> Option<&'static str> {
    if proto.eq_ignore_ascii_case("https") {
        Some("https")
    } else if proto.eq_ignore_ascii_case("http") {
        Some("http")
    } else {
        None
    }
}
