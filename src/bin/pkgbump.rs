//! pkgbump CLI - Update the PKGBUILD from the latest GitHub release
//!
//! Usage:
//!   pkgbump                        Update PKGBUILD in place
//!   pkgbump --dry-run              Print the rendered manifest instead
//!   pkgbump -o path/to/PKGBUILD    Write somewhere else

use anyhow::{Context, Result};
use clap::Parser;
use pkgbump::{github, manifest, output, template, version};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pkgbump")]
#[command(about = "Update AUR packaging manifest from GitHub release metadata")]
#[command(version)]
struct Cli {
    /// GitHub repository to track (owner/repo)
    #[arg(long, default_value = manifest::GITHUB_REPO)]
    repo: String,

    /// Path to the manifest template
    #[arg(short, long, default_value = "templates/PKGBUILD.hbs")]
    template: PathBuf,

    /// Path to write the rendered manifest
    #[arg(short, long, default_value = "PKGBUILD")]
    output: PathBuf,

    /// Print the rendered manifest to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    output::action(&format!("Fetching latest release of {}", cli.repo));
    let pb = output::spinner("querying GitHub API");
    let release = github::latest_release(&cli.repo);
    output::spinner_done(pb);
    let release = release?;

    let version = version::extract_version(&release.tag_name);
    output::info(&format!(
        "Latest release: {} (version: {})",
        release.tag_name, version
    ));
    output::detail(&format!("{} asset(s) in release", release.assets.len()));
    if !version::is_semver(version) {
        output::warning(&format!("'{}' is not a valid semver version", version));
    }

    let vars = manifest::collect_template_vars(&release, version)?;
    for (key, triple) in manifest::TARGETS {
        let sha256 = &vars[&format!("{}_sha256", key)];
        output::detail(&format!(
            "{}: sha256 {}...",
            manifest::asset_name(version, triple),
            &sha256[..sha256.len().min(16)]
        ));
    }

    if cli.dry_run {
        let template_src = std::fs::read_to_string(&cli.template)
            .with_context(|| format!("Failed to read template {}", cli.template.display()))?;
        print!("{}", template::render(&template_src, &vars)?);
        return Ok(());
    }

    output::action(&format!("Rendering {}", cli.template.display()));
    template::render_to_file(&cli.template, &cli.output, &vars)?;

    output::success(&format!(
        "{} updated to version {}",
        cli.output.display(),
        version
    ));
    Ok(())
}
