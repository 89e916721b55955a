// tests/export_tests.rs
//! JSON export of the resolved configuration

mod common;
use common::sample_config;

use blog_site_config::export::{export_to_json, to_json};
use blog_site_config::SiteConfig;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[test]
fn export_contains_resolved_builtin_values() {
    common::setup();
    let json = to_json(&SiteConfig::builtin()).unwrap();

    assert_eq!(json["export_format"], "blog-site-config-v1");
    assert!(json["exported_at"].as_str().unwrap().ends_with('Z'));
    assert_eq!(json["exporter_version"], env!("CARGO_PKG_VERSION"));

    assert_eq!(json["site"]["title"], "Software Insights");
    assert_eq!(json["site"]["lightAndDarkMode"], true);
    assert_eq!(json["site"]["postPerPage"], 3);
    assert_eq!(json["locale"], serde_json::json!(["fr-Fr"]));
    assert_eq!(json["logoImage"]["width"], 216);
    assert_eq!(json["logoImage"]["enable"], false);

    let socials = json["socials"].as_array().unwrap();
    assert_eq!(socials.len(), 3);
    assert_eq!(socials[0]["name"], "Github");
    assert_eq!(socials[0]["linkTitle"], " Software Insights on Github");
    assert_eq!(socials[1]["linkTitle"], "Software Insights on LinkedIn");
    assert_eq!(socials[2]["linkTitle"], "Send an email to Software Insights");
    assert_eq!(socials[2]["active"], false);
}

#[test]
fn export_renders_titles_from_current_site() {
    let conf = SiteConfig::builtin();
    let conf = conf.clone().with_site(conf.site().retitled("X"));
    let json = to_json(&conf).unwrap();

    for social in json["socials"].as_array().unwrap() {
        let title = social["linkTitle"].as_str().unwrap();
        assert!(title.contains('X'));
        assert!(!title.contains("Software Insights"));
    }
}

#[test]
fn export_to_json_writes_file() {
    common::setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("site.json");

    export_to_json(&sample_config(), &path).expect("export failed");

    let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["site"]["title"], "Sample Blog");
    assert_eq!(json["locale"][0], "en-GB");
    assert_eq!(json["socials"][0]["name"], "Mastodon");
    assert_eq!(json["socials"][0]["linkTitle"], "Sample Blog on Mastodon");
    assert_eq!(json["socials"][1]["linkTitle"], "Send an email to Sample Blog");
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("site.json");
    assert!(export_to_json(&SiteConfig::builtin(), path).is_err());
}
