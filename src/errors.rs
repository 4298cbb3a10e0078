// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{error, fmt, io};

#[derive(Debug)]
pub enum FastkitError {
    Io(io::Error),
    Format(String),
    Range(String),
    Table(String),
    Config(String),
    DuplicateId(String),
}

// These allow conversion to FastkitError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for FastkitError {
    fn from(e: io::Error) -> Self {
        FastkitError::Io(e)
    }
}

impl From<csv::Error> for FastkitError {
    fn from(e: csv::Error) -> Self {
        FastkitError::Table(e.to_string())
    }
}

impl From<serde_json::Error> for FastkitError {
    fn from(e: serde_json::Error) -> Self {
        FastkitError::Config(e.to_string())
    }
}

impl fmt::Display for FastkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastkitError::Io(e) => write!(f, "I/O error: {}", e),
            FastkitError::Format(msg) => write!(f, "Format error: {}", msg),
            FastkitError::Range(msg) => write!(f, "Range error: {}", msg),
            FastkitError::Table(msg) => write!(f, "Tag table error: {}", msg),
            FastkitError::Config(msg) => write!(f, "Config error: {}", msg),
            FastkitError::DuplicateId(id) => write!(f, "Duplicate sequence id: {}", id),
        }
    }
}

impl error::Error for FastkitError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            FastkitError::Io(e) => Some(e),
            _ => None,
        }
    }
}
