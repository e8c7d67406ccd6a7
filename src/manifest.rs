//! Manifest update pipeline: which assets a release must carry and how
//! their checksums map onto template variables.

use anyhow::{Result, anyhow};
use std::collections::BTreeMap;

use crate::digest::sha256_from_digest;
use crate::github::Release;

/// Repository whose releases feed the packaging manifest.
pub const GITHUB_REPO: &str = "pirafrank/poof";

/// Binary name used in release asset filenames.
const PROJECT: &str = "poof";

/// Template variable key prefix and target triple for each required asset.
/// Each key gets a `<key>_sha256` variable in the rendered manifest.
pub const TARGETS: [(&str, &str); 4] = [
    ("linux_x86_64", "x86_64-unknown-linux-gnu"),
    ("linux_aarch64", "aarch64-unknown-linux-gnu"),
    ("linux_armv7", "armv7-unknown-linux-gnueabihf"),
    ("linux_riscv64gc", "riscv64gc-unknown-linux-gnu"),
];

/// Expected asset filename for a version and target triple.
pub fn asset_name(version: &str, triple: &str) -> String {
    format!("{}-{}-{}.tar.gz", PROJECT, version, triple)
}

/// Resolve every required asset in the release and collect the template
/// variables: `version` plus one `<key>_sha256` entry per target.
///
/// Fails fast on the first missing asset, missing digest field, or
/// malformed digest. A `BTreeMap` keeps variable order deterministic so
/// repeated runs against the same release render identical output.
pub fn collect_template_vars(
    release: &Release,
    version: &str,
) -> Result<BTreeMap<String, String>> {
    let mut vars = BTreeMap::new();
    vars.insert("version".to_string(), version.to_string());

    for (key, triple) in TARGETS {
        let pattern = asset_name(version, triple);
        let asset = release
            .find_asset(&pattern)
            .ok_or_else(|| anyhow!("Required asset '{}' not found in release", pattern))?;

        let digest = asset
            .digest
            .as_deref()
            .ok_or_else(|| anyhow!("No digest found for asset '{}'", pattern))?;

        let sha256 = sha256_from_digest(digest)
            .map_err(|e| e.context(format!("Bad digest on asset '{}'", pattern)))?;

        vars.insert(format!("{}_sha256", key), sha256.to_string());
    }

    Ok(vars)
}
