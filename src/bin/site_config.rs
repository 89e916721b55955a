// src/bin/site_config.rs
//! Validate the site configuration and dump it as JSON

use anyhow::{Context, Result};
use blog_site_config::config::{self, SiteConfig};
use blog_site_config::export::json::{export_to_json, to_json_string};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "site-config", about = "Validate the blog configuration and dump it as JSON", version)]
struct Args {
    /// TOML configuration to load instead of the built-in values
    config: Option<PathBuf>,

    /// Write the JSON here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

/// Load (or build) the configuration and validate it
fn resolve(args: &Args) -> Result<SiteConfig> {
    match &args.config {
        Some(path) => config::load_from_path(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => {
            let conf = SiteConfig::builtin();
            conf.validate().context("Built-in configuration is invalid")?;
            Ok(conf)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let conf = config::init(resolve(&args)?).context("Failed to install site configuration")?;

    info!(
        title = %conf.site().title,
        socials = conf.socials().len(),
        active = conf.socials().active().count(),
        "site configuration is valid"
    );

    match &args.out {
        Some(out) => export_to_json(conf, out)
            .with_context(|| format!("Failed to write {}", out.display()))?,
        None => println!("{}", to_json_string(conf)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    run(Args::parse())
}
