use std::path::Path;

use clap::Parser;
use tokio::io::AsyncWriteExt;

use message_table::config::Config;
use message_table::page::MemoryPage;
use message_table::table::CONTAINER_ID;
use message_table::transport::{HttpTransport, TransportError};
use message_table::{ErrorCode, PipelineError, fetch_and_render};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: std::io::Error },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // stdout carries the rendered page, so logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }
    let config = Config::parse();

    let transport = HttpTransport::new()?;
    let mut page = MemoryPage::with_container(&config.title, CONTAINER_ID);

    match fetch_and_render(&transport, &mut page, &config.endpoint).await {
        Ok(count) => tracing::info!(count, endpoint = %config.endpoint, "page rendered"),
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "message table not rendered");
            return Err(e.into());
        }
    }

    write_page(config.output.as_deref(), &page.to_html()).await
}

async fn write_page(output: Option<&Path>, html: &str) -> Result<(), AppError> {
    match output {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .map_err(|source| AppError::Write { path: path.display().to_string(), source })?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(html.as_bytes())
                .await
                .map_err(|source| AppError::Write { path: "<stdout>".into(), source })?;
            stdout
                .flush()
                .await
                .map_err(|source| AppError::Write { path: "<stdout>".into(), source })?;
        }
    }
    Ok(())
}
