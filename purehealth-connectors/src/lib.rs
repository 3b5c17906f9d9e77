//! Remote Analysis Backend Client for PureHealth
//!
//! ## Overview
//!
//! The only external collaborator the app talks to is the analysis
//! backend: a REST service under `/api/ai/...` that accepts uploaded
//! datasets or parameter JSON and returns analysis, prediction, and
//! risk-assessment documents. This crate wraps those endpoints behind
//! typed methods so the service layer never sees raw HTTP.
//!
//! ## Design Decisions
//!
//! - **HTTP only**: the backend exposes nothing else; there is no
//!   broker or constrained-device transport in this system.
//! - **JSON as the only format**: responses are free-form JSON parsed
//!   into tolerant typed records - unknown fields are ignored, missing
//!   fields become `None`, and a structurally broken body is an error,
//!   not a panic.
//! - **No automatic retry**: failures surface immediately with the
//!   HTTP status embedded, and the service layer decides what to tell
//!   the user. Observed backend behavior makes blind retry unsafe for
//!   the upload endpoints (duplicate report rows).
//! - **Failure is descriptive**: every error carries enough context to
//!   render a useful transient notification.
//!
//! ## Example Usage
//!
//! ```no_run
//! use purehealth_connectors::backend::{BackendClient, BackendConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BackendConfig::new("https://api.purehealth.in")
//!     .bearer_token("field-tablet-token")
//!     .timeout_secs(30);
//!
//! let client = BackendClient::new(config)?;
//! let analysis = client.analyze("MH-GODAVARI-01", None).await?;
//! println!("backend WQI: {:?}", analysis.wqi);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;

pub use backend::{BackendClient, BackendConfig, BackendError};

/// Connection statistics shared by connectors
#[derive(Debug, Clone, Default)]
pub struct ConnectionStats {
    /// Requests that completed with a 2xx status
    pub requests_ok: u64,
    /// Requests that failed (transport or status)
    pub requests_failed: u64,
    /// Request payload bytes sent
    pub bytes_sent: u64,
    /// Response payload bytes received
    pub bytes_received: u64,
}

/// Async connector abstraction for backend transports
///
/// The service layer talks to this trait so tests can swap in a
/// recording fake; [`BackendClient`] is the production implementation.
#[async_trait::async_trait]
pub trait AsyncConnector {
    /// Transport-specific error type
    type Error;

    /// Send a JSON payload to a backend path
    async fn send(&self, path: &str, payload: &[u8]) -> Result<serde_json::Value, Self::Error>;

    /// Whether the connector considers itself usable
    fn is_connected(&self) -> bool;

    /// Snapshot of the connection counters
    fn stats(&self) -> ConnectionStats;
}
