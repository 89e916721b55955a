// src/config/app.rs
use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::locale::Locale;
use crate::logo::LogoImage;
use crate::site::Site;
use crate::socials::{ResolvedSocial, Socials};
use crate::validate;

/// The whole site configuration: site descriptor, locale list, logo hints
/// and social links. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    site: Site,
    #[serde(default)]
    locale: Locale,
    #[serde(default = "default_logo_image")]
    logo_image: LogoImage,
    #[serde(default)]
    socials: Socials,
}

impl SiteConfig {
    pub fn new(site: Site, locale: Locale, logo_image: LogoImage, socials: Socials) -> Self {
        Self {
            site,
            locale,
            logo_image,
            socials,
        }
    }

    /// The site's own values. Always succeeds.
    pub fn builtin() -> Self {
        let site = default_site();
        let locale = default_locale();
        let logo_image = default_logo_image();
        let socials = default_socials();
        Self::new(site, locale, logo_image, socials)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Same configuration under a different site descriptor. Link titles
    /// render from the new title.
    pub fn with_site(self, site: Site) -> Self {
        Self { site, ..self }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn logo_image(&self) -> &LogoImage {
        &self.logo_image
    }

    pub fn socials(&self) -> &Socials {
        &self.socials
    }

    /// Social links with titles rendered against the current site title
    pub fn resolved_socials(&self) -> Vec<ResolvedSocial> {
        self.socials.resolve(&self.site)
    }

    pub fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Global config, built from the built-in values on first use.
///
/// # Panics
///
/// If the built-in configuration fails validation. The process must not run
/// with a malformed site configuration.
pub fn load() -> &'static SiteConfig {
    CONFIG.get_or_init(|| {
        let conf = SiteConfig::builtin();
        if let Err(e) = conf.validate() {
            panic!("built-in site configuration is invalid: {e}");
        }
        debug!(title = %conf.site.title, "site configuration loaded");
        conf
    })
}

/// Install `config` as the global configuration. Must run before the first
/// [`load`].
pub fn init(config: SiteConfig) -> Result<&'static SiteConfig> {
    config.validate()?;
    let title = config.site.title.clone();
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    debug!(%title, "site configuration installed");
    Ok(load())
}

/// Read, parse and validate a TOML configuration file
pub fn load_from_path(path: impl AsRef<Path>) -> Result<SiteConfig> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading site configuration");
    let content = std::fs::read_to_string(path)?;
    SiteConfig::from_toml_str(&content)
}

pub fn site() -> &'static Site {
    load().site()
}

pub fn locale() -> &'static Locale {
    load().locale()
}

pub fn logo_image() -> &'static LogoImage {
    load().logo_image()
}

pub fn socials() -> &'static Socials {
    load().socials()
}
