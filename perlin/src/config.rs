//! Configuration file loading.

use std::{fs, io, path::Path};

use perlin_core::field::FieldSpec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "perlin.json5";

/// An error that can occur while loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid JSON5 for this schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: String,
        /// Underlying parse error.
        source: serde_json5::Error,
    },
}

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinConfig {
    /// The field to generate.
    pub field: FieldSpec,
    /// Evaluate on the rayon pool instead of the main thread.
    pub parallel: bool,
}

impl Default for PerlinConfig {
    fn default() -> Self {
        Self {
            field: FieldSpec::default(),
            parallel: true,
        }
    }
}

impl PerlinConfig {
    /// Load the configuration at `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {display}, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: display,
                    source,
                });
            }
        };

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    fn parse(content: &str) -> Result<Self, serde_json5::Error> {
        serde_json5::from_str(content)
    }
}
