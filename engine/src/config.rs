use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::HashPolicy;
use crate::storage::MAX_BUCKET_COUNT;

pub const DEFAULT_DATA_FILE: &str = "CS 300 ABCU_Advising_Program_Input.csv";
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Planner settings, read from a JSON file. Every field has a default, so
/// `{}` is a complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_file: PathBuf,
    pub bucket_count: usize,
    pub hash_policy: HashPolicy,
    pub delimiter: char,
    /// Drop the first line of the source instead of reading it as a course.
    pub skip_header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            bucket_count: DEFAULT_BUCKET_COUNT,
            hash_policy: HashPolicy::default(),
            delimiter: ',',
            skip_header: false,
        }
    }
}

impl Config {
    /// Reads `path`. A missing file yields the defaults; a file that exists
    /// but does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(Error::Config(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let config: Config = serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("invalid {}: {}", path.display(), e)))?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_BUCKET_COUNT).contains(&self.bucket_count) {
            return Err(Error::Config(format!(
                "bucket_count must be between 1 and {}, got {}",
                MAX_BUCKET_COUNT, self.bucket_count
            )));
        }
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::Config(
                "delimiter cannot be a line terminator".to_string(),
            ));
        }
        Ok(())
    }
}
