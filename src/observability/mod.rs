//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! responder / http / lifecycle
//!     → tracing macros (info!, debug!, warn!)
//!     → logging.rs (one process-wide subscriber, EnvFilter + line format)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Subscriber installed once at startup, never mutated per request
//! - `RUST_LOG` overrides the configured filter

pub mod logging;

pub use logging::{init, LineFormat};
