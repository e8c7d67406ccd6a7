//! GitHub releases API client
//!
//! Fetches the latest release for a repository and deserializes the
//! fields this tool cares about: the tag name and the asset list with
//! vendor-supplied content digests.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::time::Duration;

/// Default HTTP timeout in seconds
const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default GitHub API base URL
const GITHUB_API_BASE: &str = "https://api.github.com";

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "pkgbump";

/// A published GitHub release.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// One downloadable file attached to a release.
///
/// The `digest` field is populated by GitHub for assets uploaded after
/// mid-2025; older releases may lack it entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(default)]
    pub digest: Option<String>,
}

impl Release {
    /// Find an asset by exact filename. No fuzzy or wildcard matching.
    pub fn find_asset(&self, name: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|asset| asset.name == name)
    }
}

/// Fetch the latest release for a repository in "owner/repo" format.
pub fn latest_release(repo: &str) -> Result<Release> {
    latest_release_from(GITHUB_API_BASE, repo)
}

/// Fetch the latest release against a configurable API base URL.
///
/// The seam exists so tests can point the client at a mock server.
pub fn latest_release_from(base_url: &str, repo: &str) -> Result<Release> {
    let url = format!("{}/repos/{}/releases/latest", base_url, repo);

    let response = ureq::get(&url)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .set("Accept", GITHUB_ACCEPT)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| {
            // Handle rate limiting specifically
            if let ureq::Error::Status(403, _) = e {
                return anyhow!("GitHub API rate limit exceeded. Try again later.");
            }
            if let ureq::Error::Status(404, _) = e {
                return anyhow!("Repository '{}' not found or has no releases", repo);
            }
            anyhow!(e).context(format!("GitHub API request to {} failed", url))
        })?;

    response
        .into_json::<Release>()
        .with_context(|| format!("Failed to parse GitHub response from {}", url))
}
