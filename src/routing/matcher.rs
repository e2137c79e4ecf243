//! Delay path-segment matching.
//!
//! # Responsibilities
//! - Accept optional digits, an optional single decimal point, then at
//!   least one digit (`5`, `5.5`, `.5`, `00.5`)
//! - Reject everything else (`.`, `5.`, `-1`, `1e3`, `+1`, `1.2.3`)
//! - Parse accepted segments into a `Delay`

use crate::responder::Delay;
use crate::routing::RouteError;

/// Matches path segments that name a delay in seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayMatcher;

impl DelayMatcher {
    /// Returns true if the whole segment has the `(\d*\.)?\d+` shape.
    pub fn matches(&self, segment: &str) -> bool {
        let (whole, fraction) = segment.split_once('.').unwrap_or(("", segment));

        !fraction.is_empty() && all_digits(whole) && all_digits(fraction)
    }

    /// Match and parse the segment.
    pub fn parse(&self, segment: &str) -> Result<Delay, RouteError> {
        if !self.matches(segment) {
            return Err(RouteError::RouteNotFound(segment.to_string()));
        }

        segment
            .parse::<f64>()
            .ok()
            .and_then(Delay::from_secs_f64)
            .ok_or_else(|| RouteError::RouteNotFound(segment.to_string()))
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a path segment with the default matcher.
pub fn parse_delay(segment: &str) -> Result<Delay, RouteError> {
    DelayMatcher.parse(segment)
}
