//! CLI subcommand implementations.
//!
//! Every command reads a backend payload from a file, or from stdin when the
//! path is `-`, and prints the derived view.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub mod chart;
pub mod companies;
pub mod compare;
pub mod market;
pub mod quote;
pub mod sectors;
pub mod volume;

/// Reads and deserializes a JSON payload from `path` (`-` for stdin).
pub fn read_payload<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read payload from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("invalid payload in {}", path.display()))
}
