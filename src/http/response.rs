//! Mapping responder outcomes onto HTTP responses.
//!
//! # Design Decisions
//! - Success bodies are plain text (`text/plain; charset=utf-8`)
//! - Every routing failure is a bare 404, never a 400

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::responder::DelayResponse;
use crate::routing::RouteError;

pub const NOT_FOUND_BODY: &str = "Not found\n";

impl IntoResponse for DelayResponse {
    fn into_response(self) -> Response {
        self.to_string().into_response()
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        match self {
            RouteError::RouteNotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
        }
    }
}
