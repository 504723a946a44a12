//! CLI configuration: flags with environment fallbacks.
//!
//! Values resolve flag → environment (including a `.env` file loaded by
//! `main`) → default.

use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::DEFAULT_ENDPOINT;

pub const DEFAULT_PAGE_TITLE: &str = "Messages";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "message-table", about = "Fetch messages and render them as an HTML table")]
pub struct Config {
    /// REST endpoint returning a JSON array of messages.
    #[arg(long, env = "MESSAGES_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Write the rendered page here instead of stdout.
    #[arg(long, short, env = "MESSAGES_OUTPUT")]
    pub output: Option<PathBuf>,

    /// `<title>` of the rendered page.
    #[arg(long, env = "MESSAGES_PAGE_TITLE", default_value = DEFAULT_PAGE_TITLE)]
    pub title: String,
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
