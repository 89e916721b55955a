// tests/global_init_tests.rs
//! Installing a custom configuration before first use.
//! One test only: the global can be set once per process.

mod common;
use common::{sample_config, site_titled};

use blog_site_config::config;
use blog_site_config::ConfigError;

#[test]
fn init_validates_then_installs_once() {
    common::setup();

    let mut bad_site = site_titled("Broken");
    bad_site.post_per_page = 0;
    let err = config::init(sample_config().with_site(bad_site)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPostPerPage));

    let installed = config::init(sample_config()).expect("first init succeeds");
    assert_eq!(installed.site().title, "Sample Blog");
    assert!(std::ptr::eq(installed, config::load()));
    assert_eq!(config::locale().tags(), ["en-GB"]);
    assert!(config::logo_image().enable);

    let titles: Vec<String> = config::load()
        .resolved_socials()
        .into_iter()
        .map(|s| s.link_title)
        .collect();
    assert_eq!(
        titles,
        ["Sample Blog on Mastodon", "Send an email to Sample Blog"]
    );

    let err = config::init(sample_config()).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyInitialized));
}
