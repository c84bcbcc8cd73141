use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub package: PackageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PackageConfig {
    /// Archive entry holding the document body.
    pub content_part: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            content_part: "content.xml".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// File written inside the output directory.
    pub file_name: String,
    pub create_dir: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: "main.tex".to_string(),
            create_dir: true,
        }
    }
}

impl Config {
    /// Configuration bundled with the binary (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        // Checked by the build script, so this only falls back if the file drifts from the structs
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the bundled defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::compiled_default())
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Parse config from TOML text; missing keys keep their defaults.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}
