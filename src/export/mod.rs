// src/export/mod.rs
//! Export utilities for blog-site-config
//!
//! Serialises the resolved configuration for template engines and site
//! generators.

pub use json::{export_to_json, to_json, to_json_string};

pub mod json;
