//! Request dispatch: the only handler mounted on the server.
//!
//! # Responsibilities
//! - Map the request method onto a routable method
//! - Resolve the path, substituting the not-found route on a miss
//! - Issue redirects for redirect routes
//! - Describe the matched route to the caller
//!
//! # Design Decisions
//! - Application handlers are not invoked here; the response names the
//!   handler and pattern that matched
//! - Unsupported methods are answered with 405 before resolution

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::HeaderValue, Request, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

use crate::http::endpoint::Endpoint;
use crate::http::request::{request_id, routable_path, X_REQUEST_ID};
use crate::routing::path::extension;
use crate::routing::{DefaultRoute, HttpMethod, RouteDescriptor, RouteTable};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable<Endpoint>>,
}

/// JSON body describing a matched application route.
#[derive(Debug, Serialize)]
pub struct RouteMatch<'a> {
    pub request_id: &'a str,
    pub handler: String,
    pub pattern: &'a str,
    pub method: HttpMethod,
    pub extension: Option<&'a str>,
    pub honor_extension: bool,
}

pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id(request.headers());
    let path = routable_path(request.uri());

    let method = match HttpMethod::try_from(request.method()) {
        Ok(method) => method,
        Err(e) => {
            tracing::warn!(request_id = %request_id, method = %request.method(), "Unsupported method");
            return with_request_id((StatusCode::METHOD_NOT_ALLOWED, e.to_string()), &request_id);
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Dispatching request"
    );

    let (route, status) = match state.routes.resolve(path, method) {
        Some(route) => (route, StatusCode::OK),
        None => {
            tracing::warn!(request_id = %request_id, method = %method, path = %path, "No route matched");
            (state.routes.not_found(), StatusCode::NOT_FOUND)
        }
    };

    if let Some(target) = route.redirect_to() {
        tracing::debug!(request_id = %request_id, target = %target, "Redirecting");
        return with_request_id(Redirect::to(target), &request_id);
    }

    let response = match route.handler() {
        Endpoint::Builtin(page) => builtin_page(*page),
        Endpoint::Named(_) => describe(route, path, status, &request_id),
    };
    with_request_id(response, &request_id)
}

fn builtin_page(page: DefaultRoute) -> Response {
    let status = match page {
        DefaultRoute::Favicon => StatusCode::NO_CONTENT,
        DefaultRoute::NotFound => StatusCode::NOT_FOUND,
        DefaultRoute::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
    };
    match page.body() {
        Some(body) => (status, body).into_response(),
        None => status.into_response(),
    }
}

fn describe(
    route: &RouteDescriptor<Endpoint>,
    path: &str,
    status: StatusCode,
    request_id: &str,
) -> Response {
    let body = RouteMatch {
        request_id,
        handler: route.handler().to_string(),
        pattern: route.uri_pattern(),
        method: route.method(),
        extension: extension(path),
        honor_extension: route.honor_extension(),
    };
    (status, Json(body)).into_response()
}

fn with_request_id(response: impl IntoResponse, request_id: &str) -> Response {
    let mut response = response.into_response();
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }
    response
}
