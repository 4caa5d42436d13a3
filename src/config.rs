//! Site configuration for vitrine.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (VITRINE_ARTIFACTS_DIR)
//! 2. Config file (vitrine.yaml)
//! 3. Defaults (src/components/artifacts, jsx/tsx, date/desc)
//!
//! Config file discovery:
//! - Searches the current directory and parents for vitrine.yaml
//! - Paths in the config file are relative to the config file's directory
//!
//! The catalog itself never reads configuration; callers load it here and
//! pass the resolved values in explicitly.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::gallery::catalog::default_extensions;
use crate::gallery::{SortBy, SortDirection};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Raw config file schema (matches the YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub artifacts: ArtifactsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtifactsSection {
    /// Gallery directory (relative to the config file)
    pub dir: Option<String>,

    /// Recognized component-file extensions
    pub extensions: Option<Vec<String>>,

    /// Default sort key for navigation
    pub sort_by: Option<SortBy>,

    /// Default sort direction for navigation
    pub sort_direction: Option<SortDirection>,
}

/// Resolved configuration with absolute paths and defaults applied
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute path to the gallery directory
    pub artifacts_dir: PathBuf,

    /// Recognized component-file extensions
    pub extensions: Vec<String>,

    /// Default sort key for navigation
    pub sort_by: SortBy,

    /// Default sort direction for navigation
    pub sort_direction: SortDirection,

    /// Path to the config file, if one was found
    pub config_file: Option<PathBuf>,
}

/// Find vitrine.yaml by searching the current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join("vitrine.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse a config file
fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve a path that may be relative to the config file's directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Load configuration from all sources
pub fn load_config() -> Result<SiteConfig, ConfigError> {
    let config_file = find_config_file();

    let (raw, base_dir) = match &config_file {
        Some(path) => {
            let raw = load_config_file(path)?;
            let base = path.parent().unwrap_or(Path::new(".")).to_path_buf();
            (raw, base)
        }
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            (ConfigFile::default(), cwd)
        }
    };

    let artifacts_dir = if let Ok(env_dir) = std::env::var("VITRINE_ARTIFACTS_DIR") {
        PathBuf::from(env_dir)
    } else if let Some(dir) = &raw.artifacts.dir {
        resolve_path(&base_dir, dir)
    } else {
        base_dir.join("src/components/artifacts")
    };

    Ok(SiteConfig {
        artifacts_dir,
        extensions: raw.artifacts.extensions.unwrap_or_else(default_extensions),
        sort_by: raw.artifacts.sort_by.unwrap_or_default(),
        sort_direction: raw.artifacts.sort_direction.unwrap_or_default(),
        config_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("vitrine.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
artifacts:
  dir: ./src/components/artifacts
  extensions: [jsx, tsx]
  sort_by: name
  sort_direction: asc
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(
            config.artifacts.dir,
            Some("./src/components/artifacts".to_string())
        );
        assert_eq!(
            config.artifacts.extensions,
            Some(vec!["jsx".to_string(), "tsx".to_string()])
        );
        assert_eq!(config.artifacts.sort_by, Some(SortBy::Name));
        assert_eq!(config.artifacts.sort_direction, Some(SortDirection::Asc));
    }

    #[test]
    fn test_empty_config_file_is_valid() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("vitrine.yaml");
        std::fs::write(&config_path, "artifacts: {}\n").unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert!(config.artifacts.dir.is_none());
        assert!(config.artifacts.sort_by.is_none());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("vitrine.yaml");
        std::fs::write(&config_path, "artifacts: [not, a, mapping]\n").unwrap();

        let err = load_config_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("vitrine.yaml"));
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/site");

        assert_eq!(
            resolve_path(&base, "gallery"),
            PathBuf::from("/home/user/site/gallery")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/gallery"),
            PathBuf::from("/absolute/gallery")
        );
    }
}
