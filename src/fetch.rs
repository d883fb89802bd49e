use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Build the reference page URL for `function`.
pub fn page_url(base_url: &str, function: &str, ext: &str) -> String {
    format!("{}/{}.{}", base_url.trim_end_matches('/'), function, ext)
}

pub fn client(user_agent: &str) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .context("Failed to build HTTP client")
}

/// Single GET, no retry. Non-2xx responses are errors.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    info!("Fetching reference page: {}", url);
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Bad response from {}", url))?;

    let body = resp
        .text()
        .await
        .with_context(|| format!("Failed to read body of {}", url))?;
    info!("Fetched {} bytes", body.len());
    Ok(body)
}

pub fn read_page(path: &Path) -> Result<String> {
    info!("Reading reference page: {}", path.display());
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
