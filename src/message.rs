//! The one entity the pipeline moves around.

use serde::Deserialize;

/// A single message as served by the `/messages` endpoint.
///
/// Created per response and discarded once rendered. Unknown JSON fields are
/// ignored; the three known ones are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Sender identifier.
    pub from: String,
    /// Recipient identifier.
    pub to: String,
    /// Body text.
    pub message: String,
}

impl Message {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, message: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into(), message: message.into() }
    }
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
