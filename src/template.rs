//! Manifest template rendering
//!
//! Templates use Handlebars syntax (`{{version}}`, `{{linux_x86_64_sha256}}`).
//! Strict mode is on so a template referencing a variable the pipeline did
//! not produce fails the run instead of rendering an empty string into a
//! checksum field.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Render a template source string with the given variables.
pub fn render(template_src: &str, vars: &BTreeMap<String, String>) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .render_template(template_src, vars)
        .context("Failed to render manifest template")
}

/// Read a template file, render it, and write the result to `output_path`,
/// overwriting any existing file. Nothing is written if rendering fails.
pub fn render_to_file(
    template_path: &Path,
    output_path: &Path,
    vars: &BTreeMap<String, String>,
) -> Result<()> {
    let template_src = fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;

    let rendered = render(&template_src, vars)?;

    fs::write(output_path, rendered)
        .with_context(|| format!("Failed to write {}", output_path.display()))
}
