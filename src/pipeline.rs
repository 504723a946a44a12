//! Fetch → decode → rows → table, once per invocation.
//!
//! DESIGN
//! ======
//! The only suspension point is the awaited GET. Everything after it is
//! synchronous, and each stage finishes before the next starts, so a
//! failure anywhere leaves the page untouched.
//!
//! ERROR HANDLING
//! ==============
//! The first failure is returned as a [`PipelineError`]. Nothing is retried
//! and no fallback content is rendered.

use crate::decode::{DecodeError, decode_messages};
use crate::error::ErrorCode;
use crate::page::PageHost;
use crate::row::build_rows;
use crate::table::{RenderError, render_table};
use crate::transport::{Transport, TransportError};

/// Default endpoint of the messages service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4567/messages";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Transport(#[from] TransportError),

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(e) => e.error_code(),
            Self::Decode(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
        }
    }
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Fetch messages from `endpoint` and render them into `host`.
///
/// Returns the number of body rows rendered.
///
/// # Errors
///
/// Returns the first [`PipelineError`] hit; the page is only mutated when
/// every earlier stage succeeded.
pub async fn fetch_and_render<T, H>(transport: &T, host: &mut H, endpoint: &str) -> Result<usize, PipelineError>
where
    T: Transport + ?Sized,
    H: PageHost,
{
    tracing::info!(%endpoint, "fetching messages");
    let body = transport.send_get(endpoint).await?;
    render_payload(host, &body)
}

/// Decode a raw body and render it into `host`.
///
/// # Errors
///
/// Returns [`PipelineError::Decode`] for a malformed body (nothing is
/// rendered) or [`PipelineError::Render`] if the container is missing.
pub fn render_payload<H: PageHost>(host: &mut H, body: &str) -> Result<usize, PipelineError> {
    let messages = decode_messages(body)?;
    let rows = build_rows(&messages);
    render_table(host, &rows)?;
    tracing::info!(count = rows.len(), "messages rendered");
    Ok(rows.len())
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
