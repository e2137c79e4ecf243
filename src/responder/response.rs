//! The confirmation produced once a wait completes.

use std::fmt;

use crate::responder::{Delay, Timestamp};

/// Outcome of a completed wait.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayResponse {
    pub delay: Delay,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

impl fmt::Display for DelayResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slept {} s from {} to {}",
            self.delay, self.start_time, self.end_time
        )
    }
}
