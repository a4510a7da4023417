// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;

use crate::errors::ExpandError;
use crate::expand::count_combinations;

pub const CONFIG_FILE_NAME: &str = ".iupacexpandconfig";

pub const DEFAULT_MAX_COMBINATIONS: usize = 1_000_000;
pub const DEFAULT_COLUMNS: usize = 10;
pub const DEFAULT_FIELD_WIDTH: usize = 10;

// Settings that may come from the config file; any key may be omitted. A max_combinations of 0
// means no limit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    pub max_combinations: usize,
    pub columns: usize,
    pub field_width: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        ExpandConfig {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            columns: DEFAULT_COLUMNS,
            field_width: DEFAULT_FIELD_WIDTH,
        }
    }
}

impl ExpandConfig {
    pub fn from_file(path: &Path) -> Result<Self, ExpandError> {
        info!("Reading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ExpandError> {
        let config: ExpandConfig = serde_json::from_str(text)?;
        config.validate()?;
        debug!("{:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ExpandError> {
        if self.columns == 0 {
            return Err(ExpandError::Format(String::from(
                "columns must be at least 1",
            )));
        }
        Ok(())
    }

    pub fn limit(&self) -> Option<usize> {
        (self.max_combinations > 0).then_some(self.max_combinations)
    }

    /// Fails if expanding `sequence` would produce more combinations than allowed. Also fails on
    /// invalid symbols, like expand() would.
    pub fn check_size(&self, sequence: &str) -> Result<usize, ExpandError> {
        let count = count_combinations(sequence)?;
        match (self.limit(), count) {
            (None, Some(n)) => Ok(n),
            (Some(limit), Some(n)) if n <= limit => Ok(n),
            (limit, count) => Err(ExpandError::TooManyCombinations { count, limit }),
        }
    }
}

// Looks in $HOME, then in the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
