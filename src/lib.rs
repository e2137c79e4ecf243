//! Sleepy Server Library
//!
//! An HTTP server that answers `GET /{delay}` after waiting `delay` seconds,
//! without tying up a worker thread while it waits.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod responder;
pub mod routing;

pub use config::schema::SleepyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use responder::{Delay, DelayResponder, DelayResponse};
