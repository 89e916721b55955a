// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("site.website must be an absolute http(s) URL, got {0:?}")]
    InvalidWebsite(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("site.postPerPage must be greater than zero")]
    InvalidPostPerPage,

    #[error("invalid locale tag {0:?}")]
    InvalidLocale(String),

    #[error("logoImage dimensions must be positive, got {width}x{height}")]
    InvalidLogoDimensions { width: u32, height: u32 },

    #[error("social link {name} has an invalid href {href:?}")]
    InvalidHref { name: String, href: String },

    #[error("social link {name} has a link title template without {{title}}: {template:?}")]
    InvalidLinkTitle { name: String, template: String },

    #[error("site configuration is already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
