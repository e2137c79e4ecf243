//! Delay responder subsystem.
//!
//! # Data Flow
//! ```text
//! Path segment ("5", "5.5", ".5")
//!     → routing::matcher (pattern check, parse into Delay)
//!     → responder.rs (log, stamp start, sleep, stamp end)
//!     → response.rs (DelayResponse rendered as plain text)
//! ```
//!
//! # Design Decisions
//! - The wait is a tokio timer, never a blocking sleep
//! - Time is read through the `Clock` trait so tests can pause it
//! - Nothing here outlives a single request

pub mod clock;
pub mod delay;
pub mod responder;
pub mod response;

pub use clock::{Clock, SystemClock, Timestamp};
pub use delay::Delay;
pub use responder::DelayResponder;
pub use response::DelayResponse;
