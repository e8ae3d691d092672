use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How `generate` prints a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Digest only.
    #[default]
    Plain,
    /// `<digest>  <path>`, the sha256sum layout.
    Coreutils,
}

fn default_expected_extensions() -> Vec<String> {
    vec!["pdf".to_string()]
}

/// Global configuration loaded from `~/.config/hashcheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashcheckConfig {
    /// Output layout for `generate`.
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Extensions that are digested without a warning. Other files are still
    /// digested; an empty list disables the check.
    #[serde(default = "default_expected_extensions")]
    pub expected_extensions: Vec<String>,
}

impl Default for HashcheckConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            expected_extensions: default_expected_extensions(),
        }
    }
}

impl HashcheckConfig {
    /// True when `path` has one of the expected extensions (case-insensitive),
    /// or when no extensions are configured.
    pub fn extension_expected(&self, path: &Path) -> bool {
        if self.expected_extensions.is_empty() {
            return true;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.expected_extensions
            .iter()
            .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hashcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init_at(path: &Path) -> Result<HashcheckConfig> {
    if !path.exists() {
        let default_cfg = HashcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: HashcheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Like [`load_or_init_at`], but an unreadable or invalid file never stops a
/// digest: the error is logged and defaults are used.
pub fn load_or_default_at(path: &Path) -> HashcheckConfig {
    load_or_init_at(path).unwrap_or_else(|e| {
        tracing::warn!(
            "ignoring config at {} ({:#}); using defaults",
            path.display(),
            e
        );
        HashcheckConfig::default()
    })
}
