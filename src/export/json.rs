// src/export/json.rs
use chrono::Utc;
use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

use crate::config::SiteConfig;
use crate::consts::EXPORT_FORMAT;
use crate::error::Result;

/// Resolved configuration as the JSON object templates consume.
///
/// Link titles are rendered against the current site title; inactive social
/// links stay in the list with `active: false`.
pub fn to_json(config: &SiteConfig) -> Result<Value> {
    Ok(json!({
        "export_format": EXPORT_FORMAT,
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "site": serde_json::to_value(config.site())?,
        "locale": serde_json::to_value(config.locale())?,
        "logoImage": serde_json::to_value(config.logo_image())?,
        "socials": serde_json::to_value(config.resolved_socials())?,
    }))
}

pub fn to_json_string(config: &SiteConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(config)?)?)
}

/// Write the resolved configuration to `path` as pretty JSON
pub fn export_to_json(config: &SiteConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_json_string(config)?)?;
    info!(
        path = %path.display(),
        socials = config.socials().len(),
        "exported site configuration"
    );
    Ok(())
}
