//! Configuration loaded from `kindred.toml`.
//!
//! ```toml
//! seed = 239
//!
//! [canvas]
//! width = 1500.0
//! height = 660.0
//! padding = 100.0
//! node_radius = 30.0
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::Path;

use kindred_core::{Error, Result, fs};
use kindred_tree::Canvas;
use serde::Deserialize;
use tracing::debug;

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "kindred.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub canvas: Canvas,
    /// Seed for color generation; entropy when absent
    pub seed: Option<u64>,
}

impl Config {
    /// Load `path`, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// [`Error::FileReadFailed`] if the file exists but cannot be read,
    /// [`Error::ConfigParseFailed`] if it is not valid config TOML.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_optional(path)? {
            Some(text) => Self::parse(path, &text),
            None => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse config text read from `path`.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigParseFailed`] if `text` is not valid config TOML.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config_parse_failed(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse(Path::new("kindred.toml"), "").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.canvas.width, 1500.0);
        assert_eq!(config.canvas.height, 660.0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_canvas_keeps_other_defaults() {
        let text = "seed = 7\n[canvas]\nwidth = 800.0\n";
        let config = Config::parse(Path::new("kindred.toml"), text).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.canvas.width, 800.0);
        assert_eq!(config.canvas.padding, 100.0);
    }

    #[test]
    fn test_malformed_config_names_file() {
        let err = Config::parse(Path::new("broken.toml"), "seed = \"many\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParseFailed { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kindred.toml");
        std::fs::write(&path, "[canvas]\nnode_radius = 12.5\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().canvas.node_radius, 12.5);
    }
}
