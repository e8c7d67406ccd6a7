//! Tag name to version string handling

/// Extract the version from a release tag name.
///
/// Strips leading `v` characters, so `v1.2.3` yields `1.2.3`. Note this
/// also means `vv1.0` yields `1.0`, matching the historical behavior the
/// published tags rely on. Anything else passes through unchanged.
pub fn extract_version(tag_name: &str) -> &str {
    tag_name.trim_start_matches('v')
}

/// Whether a version string is valid semver. Used only to warn, tags
/// are taken as-is either way.
pub fn is_semver(version: &str) -> bool {
    semver::Version::parse(version).is_ok()
}
