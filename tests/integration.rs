//! End-to-end pipeline tests against a mock GitHub API server.

use std::collections::BTreeMap;
use std::fs;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pkgbump::{github, manifest, template, version};

const TEMPLATE: &str = "\
pkgver={{version}}
sha256sums_x86_64=('{{linux_x86_64_sha256}}')
sha256sums_aarch64=('{{linux_aarch64_sha256}}')
sha256sums_armv7h=('{{linux_armv7_sha256}}')
sha256sums_riscv64=('{{linux_riscv64gc_sha256}}')
";

fn sha(i: usize) -> String {
    format!("{:02x}", i).repeat(32)
}

/// Release JSON with all four required assets carrying valid digests.
fn full_release_json(version: &str) -> serde_json::Value {
    let assets: Vec<serde_json::Value> = manifest::TARGETS
        .iter()
        .enumerate()
        .map(|(i, (_, triple))| {
            serde_json::json!({
                "name": manifest::asset_name(version, triple),
                "digest": format!("sha256:{}", sha(i)),
            })
        })
        .collect();
    serde_json::json!({ "tag_name": format!("v{}", version), "assets": assets })
}

async fn mock_latest(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/repos/pirafrank/poof/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn run_pipeline(base_url: &str) -> anyhow::Result<BTreeMap<String, String>> {
    let release = github::latest_release_from(base_url, "pirafrank/poof")?;
    let version = version::extract_version(&release.tag_name).to_string();
    manifest::collect_template_vars(&release, &version)
}

#[tokio::test(flavor = "multi_thread")]
async fn full_pipeline_renders_manifest() {
    let server = MockServer::start().await;
    mock_latest(&server, full_release_json("1.2.3")).await;

    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("PKGBUILD.hbs");
    let output_path = dir.path().join("PKGBUILD");
    fs::write(&template_path, TEMPLATE).unwrap();

    let vars = run_pipeline(&server.uri()).unwrap();
    template::render_to_file(&template_path, &output_path, &vars).unwrap();

    let rendered = fs::read_to_string(&output_path).unwrap();
    assert!(rendered.contains("pkgver=1.2.3"));
    for i in 0..4 {
        assert!(rendered.contains(&sha(i)));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn rerun_is_idempotent() {
    let server = MockServer::start().await;
    mock_latest(&server, full_release_json("2.0.0")).await;

    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("PKGBUILD.hbs");
    let output_path = dir.path().join("PKGBUILD");
    fs::write(&template_path, TEMPLATE).unwrap();

    let vars = run_pipeline(&server.uri()).unwrap();
    template::render_to_file(&template_path, &output_path, &vars).unwrap();
    let first = fs::read(&output_path).unwrap();

    let vars = run_pipeline(&server.uri()).unwrap();
    template::render_to_file(&template_path, &output_path, &vars).unwrap();
    let second = fs::read(&output_path).unwrap();

    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_asset_fails_fast() {
    let server = MockServer::start().await;
    // Only the x86_64 asset is published
    mock_latest(
        &server,
        serde_json::json!({
            "tag_name": "v1.2.3",
            "assets": [{
                "name": "poof-1.2.3-x86_64-unknown-linux-gnu.tar.gz",
                "digest": format!("sha256:{}", sha(0)),
            }]
        }),
    )
    .await;

    let err = run_pipeline(&server.uri()).unwrap_err();
    assert!(err.to_string().contains("aarch64"));
    assert!(err.to_string().contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn asset_without_digest_fails() {
    let server = MockServer::start().await;
    let mut body = full_release_json("1.2.3");
    body["assets"][1].as_object_mut().unwrap().remove("digest");
    mock_latest(&server, body).await;

    let err = run_pipeline(&server.uri()).unwrap_err();
    assert!(err.to_string().contains("No digest found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_digest_fails() {
    let server = MockServer::start().await;
    let mut body = full_release_json("1.2.3");
    body["assets"][0]["digest"] = serde_json::json!("sha256:");
    mock_latest(&server, body).await;

    let err = run_pipeline(&server.uri()).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid digest format"));
}

#[tokio::test(flavor = "multi_thread")]
async fn tag_without_v_prefix_passes_through() {
    let server = MockServer::start().await;
    let mut body = full_release_json("1.2.3");
    body["tag_name"] = serde_json::json!("1.2.3");
    mock_latest(&server, body).await;

    let vars = run_pipeline(&server.uri()).unwrap();
    assert_eq!(vars["version"], "1.2.3");
}

#[tokio::test(flavor = "multi_thread")]
async fn shipped_template_renders_with_pipeline_vars() {
    let server = MockServer::start().await;
    mock_latest(&server, full_release_json("1.2.3")).await;

    let vars = run_pipeline(&server.uri()).unwrap();
    let template_src = include_str!("../templates/PKGBUILD.hbs");
    let rendered = template::render(template_src, &vars).unwrap();

    assert!(rendered.contains("pkgver=1.2.3"));
    assert!(!rendered.contains("{{"));
}
