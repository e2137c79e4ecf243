//! The requested wait, in seconds.

use std::fmt;
use std::time::Duration;

/// A non-negative number of seconds to wait before responding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Delay {
    seconds: f64,
}

impl Delay {
    /// Create a delay from seconds. Returns `None` for negative or NaN values.
    pub fn from_secs_f64(seconds: f64) -> Option<Self> {
        if seconds >= 0.0 {
            Some(Self { seconds })
        } else {
            None
        }
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.seconds
    }

    /// Duration to sleep for.
    ///
    /// Values past what `Duration` can hold (including infinity) saturate to
    /// `Duration::MAX`; tokio treats that as a far-future deadline.
    pub fn as_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.seconds).unwrap_or(Duration::MAX)
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seconds)
    }
}
