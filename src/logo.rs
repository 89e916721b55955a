// src/logo.rs
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LOGO_ENABLE, DEFAULT_LOGO_HEIGHT, DEFAULT_LOGO_SVG, DEFAULT_LOGO_WIDTH};

/// Display hints for the header logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogoImage {
    pub enable: bool,
    pub svg: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for LogoImage {
    fn default() -> Self {
        Self {
            enable: DEFAULT_LOGO_ENABLE,
            svg: DEFAULT_LOGO_SVG,
            width: DEFAULT_LOGO_WIDTH,
            height: DEFAULT_LOGO_HEIGHT,
        }
    }
}
