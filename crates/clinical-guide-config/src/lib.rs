use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Exporter settings. Command-line flags take precedence over these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory the static site is written to.
    pub output_path: PathBuf,
    /// URL prefix the site is served under, e.g. `/guide`. Empty for the root.
    #[serde(default)]
    pub base_path: String,
}

impl Config {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            base_path: String::new(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the output directory
        config.output_path = Self::expand_path(&config.output_path).unwrap_or(config.output_path);
        config.base_path = normalize_base_path(&config.base_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/clinical-guide");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// `guide/` and `/guide` both become `/guide`; blank or `/` becomes empty.
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/clinical-guide/config.toml"));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        assert!(Config::load_from_path(&missing).unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let config = Config {
            output_path: PathBuf::from("/tmp/site"),
            base_path: "/guide".to_string(),
        };

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_base_path_defaults_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "output_path = \"/srv/site\"\n").unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded, Config::new("/srv/site"));
    }

    #[test]
    fn test_base_path_is_normalized_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "output_path = \"/srv/site\"\nbase_path = \"guide/\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded.base_path, "/guide");
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "output_path = [").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_output_path_expands_tilde() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "output_path = \"~/site\"\n").unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        let path = loaded.output_path.to_string_lossy();
        assert!(!path.starts_with('~'));
        assert!(path.ends_with("site"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("CLINICAL_GUIDE_TEST_ROOT", "/srv/www");
        }

        let expanded = Config::expand_path(Path::new("$CLINICAL_GUIDE_TEST_ROOT/guide"));
        assert_eq!(expanded, Some(PathBuf::from("/srv/www/guide")));

        unsafe {
            env::remove_var("CLINICAL_GUIDE_TEST_ROOT");
        }
    }

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(
            Config::expand_path(Path::new("relative/site")),
            Some(PathBuf::from("relative/site"))
        );
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("guide"), "/guide");
        assert_eq!(normalize_base_path("/a/b/"), "/a/b");
    }
}
