//! # message-table
//!
//! Fetches a JSON array of messages from a REST endpoint and renders them as
//! an HTML table inside a page container.
//!
//! The pipeline is four stages, each consuming the previous one's output:
//! [`transport`] issues the GET, [`decode`] parses the body into
//! [`Message`]s, [`row`] turns each message into display cells, and
//! [`table`] appends the finished `<table>` through a [`page::PageHost`].
//! [`pipeline`] runs them once, in order.

pub mod decode;
pub mod dom;
pub mod error;
pub mod message;
pub mod page;
pub mod pipeline;
pub mod row;
pub mod table;
pub mod transport;

#[cfg(feature = "native")]
pub mod config;

#[cfg(feature = "browser")]
pub mod web;

pub use error::ErrorCode;
pub use message::Message;
pub use pipeline::{DEFAULT_ENDPOINT, PipelineError, fetch_and_render, render_payload};
