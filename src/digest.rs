//! Asset digest parsing
//!
//! GitHub reports asset checksums as `"sha256:<hex>"` strings in the
//! release API. Only the hex part goes into the rendered manifest.

use anyhow::{Result, bail};

const SHA256_PREFIX: &str = "sha256:";

/// Extract the hex hash from a `"sha256:<hex>"` digest string.
///
/// Fails on a missing `sha256:` prefix or an empty hash value.
pub fn sha256_from_digest(digest: &str) -> Result<&str> {
    let Some(hex) = digest.strip_prefix(SHA256_PREFIX) else {
        bail!("Invalid digest format: '{}'", digest);
    };
    if hex.is_empty() {
        bail!("Invalid digest format: '{}'", digest);
    }
    Ok(hex)
}
