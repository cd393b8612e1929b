#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MODERN_HEAD: &str = r#"<head>
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="../../assets/js/core/api.js?v=19"></script>
</head>"#;

pub const LEGACY_HEAD: &str = r#"<head>
    <link rel="stylesheet" href="../../assets/css/admin.css?v=18">
    <script src="../../assets/js/admin.js?v=18"></script>
    <script src="../../assets/js/core/api.js?v=7"></script>
</head>"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub site: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let site = make_fixture_site(tmp.path());
        Self { _tmp: tmp, site }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("sitekeep");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn site_arg(&self) -> &str {
        self.site.to_str().expect("site path utf8")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write(&self, rel: &str, body: &str) {
        write_page(&self.site, rel, body);
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.site.join(rel)).expect("read fixture file")
    }
}

fn write_page(root: &Path, rel: &str, body: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().expect("fixture parent")).expect("create fixture dir");
    fs::write(p, body).expect("write fixture file");
}

/// A small frontend tree: admin/shop dashboards, migrated pages, reference
/// pages, legacy pages, plus noise the tools must ignore.
fn make_fixture_site(base: &Path) -> PathBuf {
    let site = base.join("frontend");

    write_page(&site, "index.html", "<script src=\"assets/js/app.js?v=14\"></script>");
    write_page(&site, "admin/index.html", LEGACY_HEAD);
    write_page(&site, "admin/products/index.html", LEGACY_HEAD);
    write_page(&site, "admin/shops/index.html", LEGACY_HEAD);
    write_page(&site, "admin/orders/index.html", MODERN_HEAD);
    write_page(&site, "admin/logs/index.html", LEGACY_HEAD);
    write_page(&site, "admin/reports/index.html", LEGACY_HEAD);
    write_page(&site, "shop/index.html", LEGACY_HEAD);
    write_page(&site, "shop/analytics/index.html", LEGACY_HEAD);
    write_page(&site, "shop/products/index.html", MODERN_HEAD);
    write_page(&site, "shop/reviews/index.html", LEGACY_HEAD);
    write_page(&site, "assets/js/admin.js", "fetch('/api?v=3')");
    write_page(&site, ".git/index.html", "<script src=\"a.js?v=5\"></script>");
    write_page(&site, "node_modules/pkg/index.html", "<script src=\"b.js?v=5\"></script>");

    site
}
