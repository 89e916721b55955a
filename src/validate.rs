// src/validate.rs
//! One-time validation pass over a [`SiteConfig`]
//!
//! Returns the first violation found. Callers installing a configuration at
//! startup treat any error as fatal.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;
use url::Url;

use crate::config::SiteConfig;
use crate::error::{ConfigError, Result};
use crate::locale::Locale;
use crate::logo::LogoImage;
use crate::site::Site;
use crate::socials::{SocialObject, Socials};

static MAILTO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^mailto:[^@\s/]+@[^@\s/]+\.[^@\s/]+$").expect("static regex"));

static LOCALE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,3}(?:-[A-Za-z0-9]{2,8})*$").expect("static regex"));

/// Absolute `http`/`https` URL with a host
pub fn is_http_url(s: &str) -> bool {
    Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false)
}

pub fn is_mailto(s: &str) -> bool {
    MAILTO.is_match(s)
}

pub fn is_locale_tag(s: &str) -> bool {
    LOCALE_TAG.is_match(s)
}

pub fn validate(config: &SiteConfig) -> Result<()> {
    validate_site(config.site())?;
    validate_locale(config.locale())?;
    validate_logo(config.logo_image())?;
    validate_socials(config.socials())
}

pub fn validate_site(site: &Site) -> Result<()> {
    if !is_http_url(&site.website) {
        return Err(ConfigError::InvalidWebsite(site.website.clone()));
    }
    if site.author.trim().is_empty() {
        return Err(ConfigError::EmptyField("site.author"));
    }
    if site.title.trim().is_empty() {
        return Err(ConfigError::EmptyField("site.title"));
    }
    if site.post_per_page == 0 {
        return Err(ConfigError::InvalidPostPerPage);
    }
    Ok(())
}

pub fn validate_locale(locale: &Locale) -> Result<()> {
    if let Some(bad) = locale.tags().iter().find(|t| !is_locale_tag(t)) {
        return Err(ConfigError::InvalidLocale(bad.clone()));
    }
    for dup in locale.duplicates() {
        warn!(tag = dup, "duplicate locale tag ignored");
    }
    Ok(())
}

pub fn validate_logo(logo: &LogoImage) -> Result<()> {
    if logo.width == 0 || logo.height == 0 {
        return Err(ConfigError::InvalidLogoDimensions {
            width: logo.width,
            height: logo.height,
        });
    }
    Ok(())
}

pub fn validate_socials(socials: &Socials) -> Result<()> {
    socials.iter().try_for_each(validate_social)?;
    if !socials.is_empty() && socials.active().next().is_none() {
        warn!("every social link is inactive; none will be displayed");
    }
    Ok(())
}

fn validate_social(social: &SocialObject) -> Result<()> {
    if !(is_http_url(&social.href) || is_mailto(&social.href)) {
        return Err(ConfigError::InvalidHref {
            name: social.name.to_string(),
            href: social.href.clone(),
        });
    }
    if !social.link_title.has_placeholder() {
        return Err(ConfigError::InvalidLinkTitle {
            name: social.name.to_string(),
            template: social.link_title.template().to_string(),
        });
    }
    Ok(())
}
