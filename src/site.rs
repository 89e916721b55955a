// src/site.rs
//! Site descriptor — global identity and metadata of the blog

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LIGHT_AND_DARK_MODE, DEFAULT_POST_PER_PAGE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Site {
    /// Absolute origin the blog is deployed to
    pub website: String,
    pub author: String,
    #[serde(default)]
    pub desc: String,
    /// Source for every social link title
    pub title: String,
    #[serde(default = "default_light_and_dark_mode")]
    pub light_and_dark_mode: bool,
    #[serde(default = "default_post_per_page")]
    pub post_per_page: u32,
}

fn default_light_and_dark_mode() -> bool {
    DEFAULT_LIGHT_AND_DARK_MODE
}

fn default_post_per_page() -> u32 {
    DEFAULT_POST_PER_PAGE
}

impl Site {
    /// Copy of this descriptor under a different title
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}
