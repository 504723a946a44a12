//! Payload decoder — raw response body to typed messages.
//!
//! DESIGN
//! ======
//! The body is decoded in one pass into `Vec<Message>`. Either every element
//! matches the message shape or the whole decode fails, so a bad payload can
//! never reach the renderer half-built.
//!
//! Elements must be JSON objects. A derived `Deserialize` would also take a
//! positional array (`["A","B","hi"]`), so elements go through
//! `ObjectMessage`, which only asks the deserializer for a map.

use serde::de::value::MapAccessDeserializer;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::error::Category;

use crate::error::ErrorCode;
use crate::message::Message;

// =============================================================================
// ERROR
// =============================================================================

/// What kind of problem stopped the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The body is not valid JSON.
    Syntax,
    /// Valid JSON, but not an array of `{from, to, message}` strings.
    Schema,
    /// The body ended in the middle of a value.
    Truncated,
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Schema => write!(f, "schema"),
            Self::Truncated => write!(f, "truncated"),
        }
    }
}

/// Error returned by [`decode_messages`].
#[derive(Debug, thiserror::Error)]
#[error("message payload {kind} error at line {line}, column {column}: {source}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub line: usize,
    pub column: usize,
    #[source]
    pub source: serde_json::Error,
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        let kind = match source.classify() {
            Category::Data => DecodeErrorKind::Schema,
            Category::Eof => DecodeErrorKind::Truncated,
            Category::Syntax | Category::Io => DecodeErrorKind::Syntax,
        };
        Self { kind, line: source.line(), column: source.column(), source }
    }
}

impl ErrorCode for DecodeError {
    fn error_code(&self) -> &'static str {
        match self.kind {
            DecodeErrorKind::Syntax => "E_DECODE_SYNTAX",
            DecodeErrorKind::Schema => "E_DECODE_SCHEMA",
            DecodeErrorKind::Truncated => "E_DECODE_TRUNCATED",
        }
    }
}

// =============================================================================
// DECODE
// =============================================================================

/// A [`Message`] that only decodes from a JSON object.
struct ObjectMessage(Message);

impl<'de> Deserialize<'de> for ObjectMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ObjectMessageVisitor)
    }
}

struct ObjectMessageVisitor;

impl<'de> Visitor<'de> for ObjectMessageVisitor {
    type Value = ObjectMessage;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a message object with string fields from, to, message")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<ObjectMessage, A::Error> {
        Message::deserialize(MapAccessDeserializer::new(map)).map(ObjectMessage)
    }
}

/// Decode a JSON array of messages, preserving order.
///
/// A leading UTF-8 byte order mark is skipped, as browser `fetch` does.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the body is not JSON, is not an array, any
/// element is not an object, or an element lacks one of the string fields
/// `from`, `to`, `message`.
pub fn decode_messages(body: &str) -> Result<Vec<Message>, DecodeError> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);
    let elements: Vec<ObjectMessage> = serde_json::from_str(body)?;
    let messages: Vec<Message> = elements.into_iter().map(|e| e.0).collect();
    tracing::debug!(count = messages.len(), "decoded message payload");
    Ok(messages)
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
