//! Row builder — one message to one ordered triple of display strings.

use crate::message::Message;

/// Display cells for one table row, in column order (from, to, message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row([String; 3]);

impl Row {
    #[must_use]
    pub fn cells(&self) -> &[String; 3] {
        &self.0
    }
}

/// Build the display row for a single message.
#[must_use]
pub fn build_row(msg: &Message) -> Row {
    Row([msg.from.clone(), msg.to.clone(), msg.message.clone()])
}

/// Build one row per message, keeping message order.
#[must_use]
pub fn build_rows(messages: &[Message]) -> Vec<Row> {
    messages.iter().map(build_row).collect()
}

#[cfg(test)]
#[path = "row_test.rs"]
mod tests;
