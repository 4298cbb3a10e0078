// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::errors::FastkitError;
use crate::rename::{
    tag_table::{DEFAULT_CODE_COLUMN, DEFAULT_TAG_COLUMN},
    DEFAULT_OUTPUT_DIR, UNKNOWN_TAG,
};
use crate::seq::fasta::DEFAULT_LINE_WIDTH;

pub const CONFIG_FILE_NAME: &str = ".fastkitconfig";

// All fields are optional in the file; missing ones take the built-in defaults.

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FastaConfig {
    pub line_width: usize,
}

impl Default for FastaConfig {
    fn default() -> Self {
        FastaConfig {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenameConfig {
    pub code_column: usize,
    pub tag_column: usize,
    pub unknown_tag: String,
    pub output_dir: String,
}

impl Default for RenameConfig {
    fn default() -> Self {
        RenameConfig {
            code_column: DEFAULT_CODE_COLUMN,
            tag_column: DEFAULT_TAG_COLUMN,
            unknown_tag: String::from(UNKNOWN_TAG),
            output_dir: String::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FastkitConfig {
    pub fasta: FastaConfig,
    pub rename: RenameConfig,
}

impl FastkitConfig {
    pub fn from_json(text: &str) -> Result<Self, FastkitError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, FastkitError> {
        let text = fs::read_to_string(path).map_err(|e| {
            FastkitError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text)
            .map_err(|e| FastkitError::Config(format!("{}: {}", path.display(), e)))
    }
}

// $HOME first, then the current directory.
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

/// Loads the explicit config file if given, else the first one found by [`find_config`], else the
/// defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<FastkitConfig, FastkitError> {
    match explicit.map(Path::to_path_buf).or_else(find_config) {
        Some(path) => FastkitConfig::from_file(&path),
        None => Ok(FastkitConfig::default()),
    }
}
