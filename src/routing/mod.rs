//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → axum router (single segment under "/")
//!     → matcher.rs (`(\d*\.)?\d+` check, parse to Delay)
//!     → Return: Delay or RouteError::RouteNotFound (404)
//! ```
//!
//! # Design Decisions
//! - No regex in hot path (single linear scan)
//! - ASCII digits only
//! - Malformed input never reaches the responder

pub mod matcher;

pub use matcher::{parse_delay, DelayMatcher};

/// Rejection raised when a path is not a delay route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route for path segment {0:?}")]
    RouteNotFound(String),
}
