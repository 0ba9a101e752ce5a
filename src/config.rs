use crate::constants::DEFAULT_DEST_SUFFIX;
use crate::utils::expand_path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Directory new projects are created under; the CLI supplies a default when unset
    #[serde(default)]
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationConfig {
    #[serde(default = "default_dest_suffix")]
    pub dest_suffix: String,
    #[serde(default)]
    pub verify_copies: bool,
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

fn default_dest_suffix() -> String {
    DEFAULT_DEST_SUFFIX.to_string()
}

fn default_show_progress() -> bool {
    true
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            dest_suffix: default_dest_suffix(),
            verify_copies: false,
            show_progress: default_show_progress(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        let default_paths = [
            PathBuf::from("config/settings.toml"),
            PathBuf::from("./config/settings.toml"),
            expand_path("~/.config/cambium/settings.toml"),
        ];

        for path in &default_paths {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// Configured scaffold base directory with `~` expanded
    pub fn scaffold_base_dir(&self) -> Option<PathBuf> {
        self.scaffold.base_dir.as_deref().map(expand_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.scaffold.base_dir.is_none());
        assert_eq!(config.migration.dest_suffix, "-cambium");
        assert!(!config.migration.verify_copies);
        assert!(config.migration.show_progress);
    }

    #[test]
    fn test_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
[scaffold]
base_dir = "/srv/projects"

[migration]
dest_suffix = "-migrated"
verify_copies = true
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.scaffold_base_dir(), Some(PathBuf::from("/srv/projects")));
        assert_eq!(config.migration.dest_suffix, "-migrated");
        assert!(config.migration.verify_copies);
        assert!(config.migration.show_progress);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[scaffold]\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.scaffold_base_dir().is_none());
        assert_eq!(config.migration.dest_suffix, "-cambium");
    }

    #[test]
    fn test_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[migration\nverify_copies = yes").unwrap();

        assert!(Config::from_file(&path).is_err());
    }
}
