//! Browser entry point.
//!
//! Runs the pipeline once when the WASM module loads, against the live page
//! and the default endpoint. Failures are logged to the console; the page is
//! left as it was.

use wasm_bindgen::prelude::wasm_bindgen;

use crate::error::ErrorCode;
use crate::page::BrowserPage;
use crate::pipeline::{DEFAULT_ENDPOINT, fetch_and_render};
use crate::transport::FetchTransport;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when the host page already installed a logger.
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        tracing::warn!(error = %e, "console logger not installed");
    }

    wasm_bindgen_futures::spawn_local(async {
        let mut page = match BrowserPage::from_window() {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(code = e.error_code(), error = %e, "page unavailable");
                return;
            }
        };
        if let Err(e) = fetch_and_render(&FetchTransport, &mut page, DEFAULT_ENDPOINT).await {
            tracing::error!(code = e.error_code(), error = %e, "message table not rendered");
        }
    });
}
