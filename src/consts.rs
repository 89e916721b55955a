// src/consts.rs
//! Shared constants — the site's built-in values and template markers

/// Placeholder replaced by `Site.title` when a link title is rendered
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Deployed origin of the blog
pub const DEFAULT_WEBSITE: &str = "https://ajoanny.github.io/";

pub const DEFAULT_AUTHOR: &str = "Arthur Joanny";

/// Meta description
pub const DEFAULT_DESC: &str =
    "Blog sur le développement logiciel, les pratiques de dev et les pratiques agiles.";

pub const DEFAULT_TITLE: &str = "Software Insights";

pub const DEFAULT_LIGHT_AND_DARK_MODE: bool = true;

/// Posts shown per listing page
pub const DEFAULT_POST_PER_PAGE: u32 = 3;

/// Locale preference list. An empty list defers to the environment default.
pub const DEFAULT_LOCALE: &[&str] = &["fr-Fr"];

pub const DEFAULT_LOGO_ENABLE: bool = false;
pub const DEFAULT_LOGO_SVG: bool = true;
pub const DEFAULT_LOGO_WIDTH: u32 = 216;
pub const DEFAULT_LOGO_HEIGHT: u32 = 46;

/// Identifier written into every JSON export
pub const EXPORT_FORMAT: &str = "blog-site-config-v1";
