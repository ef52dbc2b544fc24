//! device-api: client for the remote device-control API
//!
//! The API exposes one GET endpoint per command (`claw/open`, `move/stop`, ...) under a
//! fixed base URL and reports the result purely through the HTTP status code. This crate
//! provides the command set, the status classification and feature-gated executors: an
//! `http` backend built on reqwest and an in-process `mock` backend for tests and demos.

mod types;
pub use types::{classify_response, classify_status, RemoteCommand, RemoteOutcome};

mod error;
pub use error::{ApiError, Result};

mod traits;
pub use traits::CommandExecutor;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::HttpExecutor;

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::{CallRecord, MockExecutor};

/// Initialize the device API client layer
pub fn init() -> Result<()> {
    tracing::info!("Initializing device API client");
    Ok(())
}
