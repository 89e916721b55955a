// src/config/defaults.rs
//! Built-in values of the site, built in dependency order: the site first,
//! then the records that do not depend on it, then the social links whose
//! titles are rendered from it.

use crate::consts::*;
use crate::enums::Platform;
use crate::locale::Locale;
use crate::logo::LogoImage;
use crate::site::Site;
use crate::socials::{SocialObject, Socials};

pub fn default_site() -> Site {
    Site {
        website: DEFAULT_WEBSITE.into(),
        author: DEFAULT_AUTHOR.into(),
        desc: DEFAULT_DESC.into(),
        title: DEFAULT_TITLE.into(),
        light_and_dark_mode: DEFAULT_LIGHT_AND_DARK_MODE,
        post_per_page: DEFAULT_POST_PER_PAGE,
    }
}

pub fn default_locale() -> Locale {
    Locale::new(DEFAULT_LOCALE.iter().copied())
}

pub fn default_logo_image() -> LogoImage {
    LogoImage::default()
}

pub fn default_socials() -> Socials {
    Socials::new(vec![
        // leading space is part of the published title
        SocialObject::new(Platform::Github, "https://github.com/ajoanny", true)
            .with_link_title(" {title} on Github"),
        SocialObject::new(
            Platform::LinkedIn,
            "https://www.linkedin.com/in/arthur-joanny-944058a4/",
            true,
        ),
        SocialObject::new(
            Platform::Mail,
            "mailto:arthur.joanny@software-insights.io",
            false,
        ),
    ])
}
