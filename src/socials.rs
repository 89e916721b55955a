// src/socials.rs
//! Social links and their derived link titles
//!
//! A link title is never stored pre-rendered. Each entry keeps a template
//! holding the `{title}` placeholder and renders it against the current
//! [`Site`] on read, so a retitled site can never leave stale titles behind.

use serde::{Deserialize, Serialize};

use crate::consts::TITLE_PLACEHOLDER;
use crate::enums::Platform;
use crate::site::Site;

/// Link title template, e.g. `"Send an email to {title}"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkTitle(String);

impl LinkTitle {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn template(&self) -> &str {
        &self.0
    }

    pub fn has_placeholder(&self) -> bool {
        self.0.contains(TITLE_PLACEHOLDER)
    }

    pub fn render(&self, title: &str) -> String {
        self.0.replace(TITLE_PLACEHOLDER, title)
    }
}

impl From<Platform> for LinkTitle {
    fn from(platform: Platform) -> Self {
        Self(platform.default_link_title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSocialObject", rename_all = "camelCase")]
pub struct SocialObject {
    pub name: Platform,
    /// Absolute URL or `mailto:` URI
    pub href: String,
    pub link_title: LinkTitle,
    /// `false` hides the entry from visitors
    pub active: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawSocialObject {
    name: Platform,
    href: String,
    #[serde(default)]
    link_title: Option<LinkTitle>,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

impl From<RawSocialObject> for SocialObject {
    fn from(raw: RawSocialObject) -> Self {
        Self {
            link_title: raw.link_title.unwrap_or_else(|| raw.name.into()),
            name: raw.name,
            href: raw.href,
            active: raw.active,
        }
    }
}

impl SocialObject {
    /// Entry using the platform's default link title template
    pub fn new(name: Platform, href: impl Into<String>, active: bool) -> Self {
        Self {
            name,
            href: href.into(),
            link_title: name.into(),
            active,
        }
    }

    pub fn with_link_title(mut self, template: impl Into<String>) -> Self {
        self.link_title = LinkTitle::new(template);
        self
    }

    pub fn link_title(&self, site: &Site) -> String {
        self.link_title.render(&site.title)
    }

    pub fn resolve(&self, site: &Site) -> ResolvedSocial {
        ResolvedSocial {
            name: self.name,
            href: self.href.clone(),
            link_title: self.link_title(site),
            active: self.active,
        }
    }
}

/// A social link with its title rendered, as templates consume it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSocial {
    pub name: Platform,
    pub href: String,
    pub link_title: String,
    pub active: bool,
}

/// Ordered social links; order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Socials(Vec<SocialObject>);

impl Socials {
    pub fn new(entries: Vec<SocialObject>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SocialObject> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First entry for `platform`
    pub fn get(&self, platform: Platform) -> Option<&SocialObject> {
        self.0.iter().find(|s| s.name == platform)
    }

    /// Entries visitors should see, in display order
    pub fn active(&self) -> impl Iterator<Item = &SocialObject> {
        self.0.iter().filter(|s| s.active)
    }

    pub fn resolve(&self, site: &Site) -> Vec<ResolvedSocial> {
        self.0.iter().map(|s| s.resolve(site)).collect()
    }
}

impl<'a> IntoIterator for &'a Socials {
    type Item = &'a SocialObject;
    type IntoIter = std::slice::Iter<'a, SocialObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
