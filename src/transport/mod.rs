//! Transport — the single outbound GET.
//!
//! DESIGN
//! ======
//! One call, one request. No timeout, retry, or cancellation is layered on
//! top; a failure comes back as a [`TransportError`] and the caller decides
//! what to do with it. The trait is `?Send` because browser fetch futures
//! are not `Send`.

#[cfg(feature = "native")]
pub mod http;

#[cfg(feature = "browser")]
pub mod fetch;

use crate::error::ErrorCode;

#[cfg(feature = "browser")]
pub use fetch::FetchTransport;
#[cfg(feature = "native")]
pub use http::HttpTransport;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while fetching the payload.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected response status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be read as text.
    #[error("response body unreadable: {0}")]
    Body(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_TRANSPORT_REQUEST",
            Self::Status { .. } => "E_TRANSPORT_STATUS",
            Self::Body(_) => "E_TRANSPORT_BODY",
            Self::ClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

// =============================================================================
// TRANSPORT TRAIT
// =============================================================================

/// Capability to issue a GET and return the raw body. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send exactly one GET to `url` and resolve once with the body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request fails, the status is not
    /// 2xx, or the body cannot be read.
    async fn send_get(&self, url: &str) -> Result<String, TransportError>;
}
