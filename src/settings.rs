use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const MAX_SLOTS: usize = 1000;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of numbered fields the form starts with.
    pub slots: usize,
    /// File name prefix for exported token files.
    pub file_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slots: 10,
            file_prefix: "items".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.slots == 0 {
            bail!("settings.slots must be at least 1");
        }
        if self.slots > MAX_SLOTS {
            bail!(
                "settings.slots must be at most {MAX_SLOTS}, got {}",
                self.slots
            );
        }
        if self.file_prefix.is_empty() || self.file_prefix.contains(['/', '\\']) {
            bail!(
                "settings.file_prefix must be a non-empty file name, got '{}'",
                self.file_prefix
            );
        }
        Ok(())
    }
}

/// Reads settings from an inline JSON object or from a path to a JSON file.
pub fn settings_from_arg(raw: Option<&str>) -> Result<Settings> {
    let raw = match raw {
        Some(value) => value.trim(),
        None => return Ok(Settings::default()),
    };
    if raw.is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = if raw.starts_with('{') {
        serde_json::from_str(raw).context("parse inline settings JSON")?
    } else {
        let path = Path::new(raw);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read settings from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parse settings JSON in {}", path.display()))?
    };
    settings.validate()?;
    Ok(settings)
}
