// tests/common.rs
//! Shared test utilities — logging setup and fixture configurations

#![allow(dead_code)] // each test binary uses a different subset

use blog_site_config::{Locale, LogoImage, Platform, Site, SiteConfig, SocialObject, Socials};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging. Safe to call from every test.
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

pub fn site_titled(title: &str) -> Site {
    Site {
        website: "https://example.org/".into(),
        author: "Test Author".into(),
        desc: "Test blog".into(),
        title: title.into(),
        light_and_dark_mode: false,
        post_per_page: 5,
    }
}

/// Small valid configuration distinct from the built-in one
pub fn sample_config() -> SiteConfig {
    SiteConfig::new(
        site_titled("Sample Blog"),
        Locale::new(["en-GB"]),
        LogoImage {
            enable: true,
            svg: false,
            width: 120,
            height: 40,
        },
        Socials::new(vec![
            SocialObject::new(Platform::Mastodon, "https://mastodon.social/@sample", true),
            SocialObject::new(Platform::Mail, "mailto:hello@example.org", true),
        ]),
    )
}
