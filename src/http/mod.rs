//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID set + propagated)
//!     → handler.rs (segment → Delay, or 404)
//!     → responder (sleep)
//!     → response.rs (DelayResponse / RouteError → HTTP)
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::NOT_FOUND_BODY;
pub use server::{HttpServer, ServerError};
