use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::extension::normalize_format_token;

/// Default upload size threshold in kB (rounded, 1 kB = 1024 bytes).
pub const DEFAULT_MAX_UPLOAD_KB: u64 = 200;

/// Guard configuration loaded from `~/.config/subguard/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Largest accepted upload, in rounded kB. A file is rejected when
    /// `round(size / 1024)` exceeds this value.
    pub max_upload_kb: u64,
    /// Accepted file extensions. Entries may carry a leading dot and any case.
    pub allowed_extensions: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            max_upload_kb: DEFAULT_MAX_UPLOAD_KB,
            allowed_extensions: vec!["srt".to_string(), "vtt".to_string()],
        }
    }
}

impl GuardConfig {
    /// Raw byte limit used by server-side request acceptance.
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_kb.saturating_mul(1024)
    }

    /// Whether a normalized extension (no dot, lowercase) is accepted.
    pub fn is_allowed(&self, ext: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| normalize_format_token(allowed) == ext)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(data: &str) -> Result<Self> {
        let cfg: GuardConfig = toml::from_str(data).context("parse guard config")?;
        Ok(cfg)
    }

    /// Render as pretty TOML, the same text written by [`load_or_init`].
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("in {}", path.display()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("subguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GuardConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but for a caller-chosen path.
pub fn load_or_init_at(path: &Path) -> Result<GuardConfig> {
    if !path.exists() {
        let default_cfg = GuardConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    GuardConfig::load_from(path)
}
