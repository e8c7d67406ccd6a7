//! Packaging manifest updater for poof releases
//!
//! Fetches the latest GitHub release, pulls SHA-256 checksums out of the
//! vendor digest field on each required asset, and renders them into an
//! AUR-style PKGBUILD template.
//!
//! The pipeline is a straight line with four fatal-exit points:
//!
//! 1. [`github::latest_release`] — GET the latest-release endpoint.
//! 2. [`version::extract_version`] — strip the tag's `v` prefix.
//! 3. [`manifest::collect_template_vars`] — resolve each required asset by
//!    exact filename and extract its `sha256:` digest.
//! 4. [`template::render_to_file`] — substitute the variables into the
//!    template and overwrite the output manifest.
//!
//! Runs are independent and idempotent: the same release state and template
//! always produce byte-identical output.

pub mod digest;
pub mod github;
pub mod manifest;
pub mod output;
pub mod template;
pub mod version;
