// tests/global_load_tests.rs
//! Process-wide instance falls back to the built-in configuration.
//! Kept in its own binary so the global starts empty.

mod common;
use common::sample_config;

use blog_site_config::config;
use blog_site_config::{ConfigError, Platform, SiteConfig};

#[test]
fn load_uses_builtin_and_blocks_later_init() {
    common::setup();

    let first = config::load();
    assert_eq!(*first, SiteConfig::builtin());
    assert!(std::ptr::eq(first, config::load()));

    assert_eq!(config::site().title, "Software Insights");
    assert_eq!(config::locale().primary(), Some("fr-Fr"));
    assert!(!config::logo_image().enable);
    assert_eq!(config::socials().len(), 3);
    assert_eq!(
        config::socials()
            .get(Platform::Github)
            .unwrap()
            .link_title(config::site()),
        " Software Insights on Github"
    );

    let err = config::init(sample_config()).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyInitialized));
    assert_eq!(config::site().title, "Software Insights");
}

#[test]
fn readers_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| config::site() as *const _ as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}
