use crate::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_TOP_BRANDS, OUTPUT_ENV_VAR};
use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Where the catalog is written
    pub output: PathBuf,
    /// External seed list; the builtin one is used when unset
    pub seed: Option<PathBuf>,
    pub top_brands: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            seed: None,
            top_brands: DEFAULT_TOP_BRANDS,
        }
    }
}

impl Config {
    /// Load `config_path` if it exists, then apply environment overrides.
    /// A missing file is not an error.
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let config_content = fs::read_to_string(config_path).map_err(|e| {
                ScraperError::Config(format!(
                    "Failed to read config file '{}': {}",
                    config_path.display(),
                    e
                ))
            })?;
            toml::from_str(&config_content)?
        } else {
            debug!("No config file at {}, using defaults", config_path.display());
            Config::default()
        };

        if let Ok(output) = std::env::var(OUTPUT_ENV_VAR) {
            if !output.trim().is_empty() {
                config.run.output = PathBuf::from(output.trim());
            }
        }

        if config.run.top_brands == 0 {
            return Err(ScraperError::Config("run.top_brands must be at least 1".into()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_behavior() {
        let config = Config::default();
        assert_eq!(config.run.output, PathBuf::from("data.json"));
        assert!(config.run.seed.is_none());
        assert_eq!(config.run.top_brands, 10);
    }

    #[test]
    fn test_parse_partial_run_table() {
        let config: Config = toml::from_str("[run]\ntop_brands = 5\n").unwrap();
        assert_eq!(config.run.top_brands, 5);
        assert_eq!(config.run.output, PathBuf::from("data.json"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[run]\nseed = \"seeds/water.json\"\ntop_brands = 3\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.run.seed, Some(PathBuf::from("seeds/water.json")));
        assert_eq!(config.run.top_brands, 3);
    }

    #[test]
    fn test_zero_top_brands_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[run]\ntop_brands = 0\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ScraperError::Config(_))));
    }
}
