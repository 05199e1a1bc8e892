use crate::category::FolderNaming;
use crate::destination::DEFAULT_IN_PROGRESS_SUFFIXES;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Retry policy parameters for folder-store operations (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per operation (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay_secs: 0.25,
            max_delay_secs: 8,
        }
    }
}

/// What to do when the destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Pick a free name: `file (1).ext`, `file (2).ext`, ...
    #[default]
    Uniquify,
    Overwrite,
    /// Leave the source where it is.
    Skip,
}

/// Global configuration loaded from `~/.config/sfd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SfdConfig {
    /// Root under which downloads are placed. None = current directory.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Suffixes stripped from names of unfinished downloads, tried in order.
    #[serde(default = "default_in_progress_suffixes")]
    pub in_progress_suffixes: Vec<String>,
    #[serde(default)]
    pub conflict: ConflictPolicy,
    /// Folder naming used by `organize`: "local" (Pictures/) or "cloud" (Images/).
    #[serde(default)]
    pub naming: FolderNaming,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

fn default_in_progress_suffixes() -> Vec<String> {
    DEFAULT_IN_PROGRESS_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for SfdConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            in_progress_suffixes: default_in_progress_suffixes(),
            conflict: ConflictPolicy::default(),
            naming: FolderNaming::default(),
            retry: None,
        }
    }
}

impl SfdConfig {
    /// Base directory: explicit override, then config, then the current directory.
    pub fn resolve_base_dir(&self, overridden: Option<&Path>) -> Result<PathBuf> {
        if let Some(p) = overridden.or(self.base_dir.as_deref()) {
            return Ok(p.to_path_buf());
        }
        std::env::current_dir().context("current directory")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sfd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SfdConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<SfdConfig> {
    if !path.exists() {
        let default_cfg = SfdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SfdConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SfdConfig::default();
        assert!(cfg.base_dir.is_none());
        assert_eq!(cfg.in_progress_suffixes, [".crdownload", ".part"]);
        assert_eq!(cfg.conflict, ConflictPolicy::Uniquify);
        assert_eq!(cfg.naming, FolderNaming::Local);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SfdConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SfdConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.in_progress_suffixes, cfg.in_progress_suffixes);
        assert_eq!(parsed.conflict, cfg.conflict);
        assert_eq!(parsed.naming, cfg.naming);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: SfdConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.in_progress_suffixes, [".crdownload", ".part"]);
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_dir = "/srv/downloads"
            in_progress_suffixes = [".partial"]
            conflict = "skip"
            naming = "cloud"

            [retry]
            max_attempts = 2
            base_delay_secs = 0.5
            max_delay_secs = 3
        "#;
        let cfg: SfdConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_dir.as_deref(), Some(Path::new("/srv/downloads")));
        assert_eq!(cfg.in_progress_suffixes, [".partial"]);
        assert_eq!(cfg.conflict, ConflictPolicy::Skip);
        assert_eq!(cfg.naming, FolderNaming::Cloud);
        let retry = cfg.retry.as_ref().unwrap();
        assert_eq!(retry.max_attempts, 2);
        assert!((retry.base_delay_secs - 0.5).abs() < 1e-9);
        assert_eq!(retry.max_delay_secs, 3);
    }

    #[test]
    fn base_dir_override_wins() {
        let cfg = SfdConfig {
            base_dir: Some(PathBuf::from("/from/config")),
            ..SfdConfig::default()
        };
        assert_eq!(
            cfg.resolve_base_dir(Some(Path::new("/from/flag"))).unwrap(),
            PathBuf::from("/from/flag")
        );
        assert_eq!(cfg.resolve_base_dir(None).unwrap(), PathBuf::from("/from/config"));
    }

    #[test]
    fn load_or_init_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.conflict, ConflictPolicy::Uniquify);
        let again = load_or_init_at(&path).unwrap();
        assert_eq!(again.in_progress_suffixes, cfg.in_progress_suffixes);
    }
}
