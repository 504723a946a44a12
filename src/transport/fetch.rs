//! Browser transport over `gloo-net` (the page's `fetch`).

use super::{Transport, TransportError};

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send_get(&self, url: &str) -> Result<String, TransportError> {
        tracing::debug!(%url, "sending GET");

        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = resp.status();
        if !(200..300).contains(&status) {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%url, status, error = %e, "error body unreadable");
                    String::new()
                }
            };
            return Err(TransportError::Status { status, body });
        }

        resp.text().await.map_err(|e| TransportError::Body(e.to_string()))
    }
}
