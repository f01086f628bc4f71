//! Release archive download and checksum

use crate::error::Result;
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::info;

/// Download file name; never committed
pub const ARCHIVE_FILE: &str = "package.zip";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// HTTP client for archive downloads
pub fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .user_agent(concat!("tap-release/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Download `url` to `dest`, following redirects; non-2xx is an error
pub async fn download_archive(client: &Client, url: &str, dest: &Path) -> Result<()> {
    info!(url, "downloading archive");
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    fs::write(dest, &bytes).await?;
    Ok(())
}

/// Lowercase hex SHA-256 of a file
pub async fn sha256_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).await?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}
