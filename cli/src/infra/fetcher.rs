//! Infrastructure implementation of the `ArtifactFetcher` port.
//!
//! Streams the response body to `<path>.part` and renames it into place, so
//! an interrupted download never leaves a truncated artifact behind. The
//! partial file is removed when the transfer fails.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use futures_util::StreamExt as _;
use reqwest::Client;
use tokio::io::AsyncWriteExt as _;

use crate::application::ports::{ArtifactFetcher, ArtifactNaming};
use crate::domain::FetchError;

/// Downloads artifacts over HTTP(S).
pub struct HttpArtifactFetcher {
    client: Client,
}

impl HttpArtifactFetcher {
    /// Build a fetcher with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

fn write_error(path: &Path, source: std::io::Error) -> FetchError {
    FetchError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Stream `response` into `part`, returning the number of bytes written.
async fn write_body(
    response: reqwest::Response,
    part: &Path,
    transport: impl Fn(reqwest::Error) -> FetchError,
) -> Result<u64, FetchError> {
    let mut file = tokio::fs::File::create(part)
        .await
        .map_err(|e| write_error(part, e))?;

    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(&transport)?;
        file.write_all(&chunk)
            .await
            .map_err(|e| write_error(part, e))?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(|e| write_error(part, e))?;
    Ok(written)
}

impl ArtifactFetcher for HttpArtifactFetcher {
    async fn fetch(&self, url: &str, naming: &ArtifactNaming) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&naming.directory)
            .await
            .map_err(|e| write_error(&naming.directory, e))?;

        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        tracing::debug!(%url, "downloading artifact");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let path = naming.path();
        let part = path.with_extension("part");
        let written = match write_body(response, &part, transport).await {
            Ok(written) => written,
            Err(e) => {
                // Best effort; the write error is the one worth reporting.
                let _ = tokio::fs::remove_file(&part).await;
                return Err(e.into());
            }
        };

        if let Err(e) = tokio::fs::rename(&part, &path).await {
            let _ = tokio::fs::remove_file(&part).await;
            return Err(write_error(&path, e).into());
        }
        tracing::debug!(path = %path.display(), bytes = written, "artifact saved");
        Ok(path)
    }
}
