//! Native HTTP transport over `reqwest`.

use super::{Transport, TransportError};

pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a client with no request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the TLS backend fails to initialize.
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send_get(&self, url: &str) -> Result<String, TransportError> {
        tracing::debug!(%url, "sending GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            // The status is the error; an unreadable error body stays empty.
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%url, status, error = %e, "error body unreadable");
                    String::new()
                }
            };
            return Err(TransportError::Status { status, body });
        }

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::debug!(%url, status, bytes = text.len(), "GET complete");
        Ok(text)
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
