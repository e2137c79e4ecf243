use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;

use crate::responder::{DelayResponder, DelayResponse};
use crate::routing::{parse_delay, RouteError};

/// `GET /{delay}`
pub async fn delay(
    State(responder): State<DelayResponder>,
    segment: Result<Path<String>, PathRejection>,
    uri: Uri,
) -> Result<DelayResponse, RouteError> {
    // Undecodable segments are routing misses too.
    let Ok(Path(segment)) = segment else {
        return Err(RouteError::RouteNotFound(uri.path().to_string()));
    };

    let delay = parse_delay(&segment)?;
    Ok(responder.respond(delay).await)
}

/// Anything that is not a single path segment.
pub async fn not_found(uri: Uri) -> RouteError {
    RouteError::RouteNotFound(uri.path().to_string())
}
