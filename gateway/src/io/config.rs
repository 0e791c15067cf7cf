//! Gateway configuration stored in `gateway.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::alias::AliasTable;

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gateway.toml";

/// Gateway configuration (TOML).
///
/// Loaded once at process start; the alias table it produces is never
/// modified at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GatewayConfig {
    /// `alias = "/physical/prefix"` entries. Iteration order (sorted by
    /// alias name) is the association order used during resolution.
    pub aliases: BTreeMap<String, String>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        for (alias, prefix) in &self.aliases {
            if alias.trim().is_empty() {
                return Err(anyhow!("aliases: alias names must be non-empty"));
            }
            if alias.contains('/') || alias.contains(':') {
                return Err(anyhow!(
                    "aliases.{alias}: alias names must not contain '/' or ':'"
                ));
            }
            if prefix.trim().is_empty() {
                return Err(anyhow!("aliases.{alias}: path must be non-empty"));
            }
            if prefix.len() > 1 && prefix.ends_with('/') {
                return Err(anyhow!(
                    "aliases.{alias}: path '{prefix}' must not end with '/'"
                ));
            }
        }
        Ok(())
    }

    pub fn alias_table(&self) -> AliasTable {
        AliasTable::from(&self.aliases)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GatewayConfig::default()` (no aliases).
pub fn load_config(path: &Path) -> Result<GatewayConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(GatewayConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GatewayConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), aliases = cfg.aliases.len(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &GatewayConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
