// src/config/mod.rs
//! Configuration system for blog-site-config
//!
//! Built-in site values, optional TOML replacement, and a lazily
//! initialised process-wide instance.

pub use app::{init, load, load_from_path, locale, logo_image, site, socials, SiteConfig};
pub use defaults::{default_locale, default_logo_image, default_site, default_socials};

mod app;
mod defaults;
