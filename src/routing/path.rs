//! Path canonicalisation helpers.
//!
//! # Responsibilities
//! - Normalise route patterns before registration
//! - Split off a trailing filename extension from request paths
//! - Classify pattern segments as literal or parameter
//!
//! # Design Decisions
//! - No regex: every helper is a single pass over the input
//! - Request paths are NOT normalised at resolution time; only patterns are

/// Canonicalise a raw path.
///
/// Adds a leading `/`, collapses runs of `/` into one and drops a trailing
/// `/`. The root stays `/`, and an empty input becomes `/`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);

    for segment in raw.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Split a request path into `(path, extension)`.
///
/// The extension is whatever follows the last `.` of the final path segment.
/// A path without such a dot is returned unchanged.
pub fn split_extension(uri: &str) -> (&str, Option<&str>) {
    let segment_start = uri.rfind('/').map(|i| i + 1).unwrap_or(0);

    match uri[segment_start..].rfind('.') {
        Some(dot) => {
            let dot = segment_start + dot;
            (&uri[..dot], Some(&uri[dot + 1..]))
        }
        None => (uri, None),
    }
}

/// Strip the trailing filename extension, if any.
pub fn strip_extension(uri: &str) -> &str {
    split_extension(uri).0
}

/// The filename extension of a request path, e.g. `json` for `/users/42.json`.
pub fn extension(uri: &str) -> Option<&str> {
    split_extension(uri).1
}

/// Whether a pattern segment is a path parameter such as `{id}`.
pub fn is_param_segment(segment: &str) -> bool {
    segment.contains('{')
}

/// Whether a pattern contains at least one parameter segment.
pub fn has_params(pattern: &str) -> bool {
    pattern.contains('{')
}

/// Non-empty `/`-separated segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Remove fragment and query string from a raw request target.
pub fn request_path(target: &str) -> &str {
    let end = target.find(|c: char| c == '#' || c == '?').unwrap_or(target.len());
    &target[..end]
}
