//! Request handling helpers.
//!
//! # Responsibilities
//! - Reuse or generate a request ID (UUID v4)
//! - Extract the routable path (no query, no fragment)
//!
//! # Design Decisions
//! - A client-supplied `x-request-id` is kept if it is valid header text
//! - Fragments are normally never sent, but are stripped anyway

use axum::http::{HeaderMap, Uri};
use uuid::Uuid;

use crate::routing::path::request_path;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The incoming request ID, or a fresh UUID v4.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Path handed to the resolver.
pub fn routable_path(uri: &Uri) -> &str {
    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    request_path(target)
}
