use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Built-in defaults shared by the library and the CLI.
///
/// Sessions are stored with a 9 character geohash (roughly 5m x 5m cells).
/// Proximity lookups use 5 characters (roughly 5km x 5km), which is about the
/// distance people travel for an evening game.
pub mod defaults {
    pub const DEFAULT_PRECISION: usize = 9;
    pub const MAX_PRECISION: usize = 20;
    pub const PROXIMITY_PRECISION: usize = 5;

    pub const COORDINATE_DECIMALS: usize = 6;

    // Roughly central France
    pub const FALLBACK_CENTER: (f64, f64) = (46.2276, 2.2137);
}

fn default_precision() -> usize {
    defaults::DEFAULT_PRECISION
}
fn default_proximity_precision() -> usize {
    defaults::PROXIMITY_PRECISION
}
fn default_verbose() -> bool {
    false
}
fn default_json() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_complement: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default = "default_proximity_precision")]
    pub proximity_precision: usize,
    #[serde(default)]
    pub fallback_center: Option<(f64, f64)>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_json")]
    pub json: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            address: None,
            address_complement: None,
            zip_code: None,
            precision: default_precision(),
            proximity_precision: default_proximity_precision(),
            fallback_center: None,
            output: None,
            json: default_json(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Load the first readable config file from the standard locations
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file; a missing file is an error
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// An explicit CLI value wins over the file, which wins over the default
    pub fn resolve_precision(&self, cli: Option<usize>) -> usize {
        cli.unwrap_or(self.precision)
    }

    pub fn resolve_proximity_precision(&self, cli: Option<usize>) -> usize {
        cli.unwrap_or(self.proximity_precision)
    }

    pub fn fallback_center(&self) -> (f64, f64) {
        self.fallback_center.unwrap_or(defaults::FALLBACK_CENTER)
    }
}

/// Candidate config files, most specific first: working directory, then the
/// platform config dir, then the home directory
fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("meetup-geo.toml"));
    paths.push(PathBuf::from(".meetup-geo.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("meetup-geo").join("config.toml"));
        paths.push(config_dir.join("meetup-geo.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".meetup-geo.toml"));
        paths.push(home.join(".config").join("meetup-geo").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_empty() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.precision, 9);
        assert_eq!(config.proximity_precision, 5);
        assert!(!config.verbose);
        assert_eq!(config.fallback_center(), (46.2276, 2.2137));
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meetup-geo.toml");
        fs::write(
            &path,
            r#"
address = "1600 Pennsylvania Ave"
zip_code = "20500"
precision = 7
fallback_center = [38.8977, -77.0365]
"#,
        )
        .unwrap();

        let config = FileConfig::from_path(&path).unwrap();
        assert_eq!(config.address.as_deref(), Some("1600 Pennsylvania Ave"));
        assert_eq!(config.zip_code.as_deref(), Some("20500"));
        assert_eq!(config.precision, 7);
        assert_eq!(config.fallback_center(), (38.8977, -77.0365));
    }

    #[test]
    fn test_cli_value_overrides_file_even_when_default() {
        let config: FileConfig =
            toml::from_str("precision = 7\nproximity_precision = 3").unwrap();

        assert_eq!(config.resolve_precision(Some(9)), 9);
        assert_eq!(config.resolve_precision(None), 7);
        assert_eq!(config.resolve_proximity_precision(Some(5)), 5);
        assert_eq!(config.resolve_proximity_precision(None), 3);

        let defaults = FileConfig::default();
        assert_eq!(defaults.resolve_precision(None), 9);
        assert_eq!(defaults.resolve_proximity_precision(None), 5);
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempdir().unwrap();
        assert!(FileConfig::from_path(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_from_path_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "precision = \"nine\"").unwrap();
        assert!(FileConfig::from_path(&path).is_err());
    }

    #[test]
    fn test_config_paths_start_local() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("meetup-geo.toml"));
    }
}
