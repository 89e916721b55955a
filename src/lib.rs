// src/lib.rs
//! blog-site-config — typed, validated configuration for the Software
//! Insights blog
//!
//! Features:
//! - Site descriptor, locale list, logo hints and social links
//! - Social link titles rendered from the site title on read
//! - One-time validation, fatal at startup
//! - Optional TOML replacement and JSON export for templates

pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod export;
pub mod locale;
pub mod logo;
pub mod site;
pub mod socials;
pub mod validate;

// Re-export everything users need at the crate root
pub use config::{load as load_config, SiteConfig};
pub use enums::Platform;
pub use error::{ConfigError, Result};
pub use export::export_to_json;
pub use locale::Locale;
pub use logo::LogoImage;
pub use site::Site;
pub use socials::{LinkTitle, ResolvedSocial, SocialObject, Socials};
