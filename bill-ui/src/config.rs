//! Startup settings: built-in defaults, an optional TOML file, then flags.
//!
//! ## File format
//!
//! Every key is optional. Unknown keys are rejected.
//!
//! ```toml
//! default_tip = 20         # one of 0, 10, 15, 20, 25
//! default_people = 4       # 2 through 20
//! log_level = "debug"      # any EnvFilter directive
//! log_file = "bill.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use bill_core::{CalculationError, CalculationInput, PeopleCount, TipPercentage};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] CalculationError),
}

/// Values read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub default_tip: Option<u8>,
    pub default_people: Option<u32>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line; each one wins over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub tip: Option<u8>,
    pub people: Option<u32>,
    pub bill: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: CalculationInput,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Merges flags over the file over the defaults, validating the
    /// tip percentage and people count.
    pub fn resolve(
        file: FileConfig,
        overrides: Overrides,
    ) -> Result<Self, ConfigError> {
        let tip_percentage = match overrides.tip.or(file.default_tip) {
            Some(tip) => TipPercentage::try_from(tip)?,
            None => TipPercentage::default(),
        };
        let people_count = match overrides.people.or(file.default_people) {
            Some(people) => PeopleCount::new(people)?,
            None => PeopleCount::default(),
        };

        Ok(Self {
            input: CalculationInput::new(
                overrides.bill.unwrap_or_default(),
                tip_percentage,
                people_count,
            ),
            log_level: overrides.log_level.or(file.log_level),
            log_file: overrides.log_file.or(file.log_file),
        })
    }
}
