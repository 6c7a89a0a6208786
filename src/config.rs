use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Connection and display settings. Resolution order: built-in defaults,
/// then the JSON config file, then environment variables, then CLI flags
/// (applied by `main`). Nothing is written back; the file is user-managed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Spreadsheet id, the token between /d/ and /edit in the sheet URL.
    pub(crate) sheet_id: String,
    pub(crate) worksheet: String,
    pub(crate) api_key: String,
    pub(crate) histogram_buckets: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: String::new(),
            worksheet: "Transactions".into(),
            api_key: String::new(),
            histogram_buckets: 30,
        }
    }
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Ok(path) if path.exists() => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?
            }
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Environment overrides beat the config file.
    pub(crate) fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("SPENDDASH_SHEET_ID") {
            self.sheet_id = v;
        }
        if let Ok(v) = std::env::var("SPENDDASH_WORKSHEET") {
            self.worksheet = v;
        }
        if let Ok(v) = std::env::var("SPENDDASH_API_KEY") {
            self.api_key = v;
        }
    }

    /// A usable config names a sheet and carries an API key; everything else
    /// has workable defaults.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.sheet_id.is_empty() {
            anyhow::bail!(
                "No sheet id configured. Set SPENDDASH_SHEET_ID, pass --sheet <id>, \
                 or add \"sheet_id\" to {}",
                Self::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the config file".into())
            );
        }
        if self.api_key.is_empty() {
            anyhow::bail!(
                "No API key configured. Set SPENDDASH_API_KEY or add \"api_key\" \
                 to the config file (a Google API key with Sheets read access)."
            );
        }
        Ok(())
    }

    pub(crate) fn config_path() -> Result<PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("com", "spenddash", "SpendDash")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
