//! Generate JSON Schema for the filetree configuration
//!
//! This binary generates a JSON Schema from the Config struct using schemars,
//! for editors that validate `config.json`.
//!
//! Usage:
//!   cargo run --bin generate_schema > config-schema.json

use anyhow::{Context, Result};
use filetree::config::Config;
use schemars::schema_for;

fn main() -> Result<()> {
    let schema = schema_for!(Config);
    let output = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    println!("{}", output);
    Ok(())
}
