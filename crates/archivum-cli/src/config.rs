use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace directory (config + notes database) by priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ARCHIVUM_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.archivum (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ARCHIVUM_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("archivum"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".archivum"));
    }

    anyhow::bail!("Could not determine workspace path: no HOME directory or XDG data directory")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Dataset path used when `--data` is not given.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Dataset path priority: explicit flag, then config, then the fixed
/// relative default the archive document ships at.
pub fn resolve_dataset_path(explicit: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = &config.dataset {
        return path.clone();
    }
    PathBuf::from("data/archive.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert!(config.dataset.is_none());
        Ok(())
    }

    #[test]
    fn save_and_load_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            dataset: Some(PathBuf::from("/srv/archive.json")),
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.dataset.as_deref(), Some(Path::new("/srv/archive.json")));
        Ok(())
    }

    #[test]
    fn explicit_dataset_path_wins() {
        let config = Config {
            dataset: Some(PathBuf::from("/from/config.json")),
        };
        let resolved = resolve_dataset_path(Some(Path::new("/explicit.json")), &config);
        assert_eq!(resolved, PathBuf::from("/explicit.json"));
    }

    #[test]
    fn default_dataset_path_is_relative() {
        let resolved = resolve_dataset_path(None, &Config::default());
        assert_eq!(resolved, PathBuf::from("data/archive.json"));
    }

    #[test]
    fn explicit_workspace_path_wins() -> Result<()> {
        let resolved = resolve_workspace_path(Some("/tmp/archivum-test"))?;
        assert_eq!(resolved, PathBuf::from("/tmp/archivum-test"));
        Ok(())
    }
}
