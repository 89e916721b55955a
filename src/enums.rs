// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the set of social platforms a link can point to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Known social platforms, in the spelling the site templates expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Platform {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    Twitter,
    Twitch,
    YouTube,
    WhatsApp,
    Snapchat,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
}

impl Platform {
    /// Link title template used when an entry does not carry its own
    pub fn default_link_title(self) -> String {
        match self {
            Platform::Mail => "Send an email to {title}".to_string(),
            other => format!("{{title}} on {other}"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // variant names are the wire names
        fmt::Debug::fmt(self, f)
    }
}
