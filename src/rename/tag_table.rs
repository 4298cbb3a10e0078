// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{collections::HashMap, fs::File, path::Path};

use csv::{ReaderBuilder, StringRecord};
use log::debug;

use crate::errors::FastkitError;
use crate::rename::clean_code;

pub const DEFAULT_CODE_COLUMN: usize = 2;
pub const DEFAULT_TAG_COLUMN: usize = 5;

// 1-based column positions, as a spreadsheet user would count them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagColumns {
    pub code: usize,
    pub tag: usize,
}

impl Default for TagColumns {
    fn default() -> Self {
        TagColumns {
            code: DEFAULT_CODE_COLUMN,
            tag: DEFAULT_TAG_COLUMN,
        }
    }
}

/// Maps cleaned accession codes to tags.
#[derive(Debug, Default, Clone)]
pub struct TagTable {
    tags: HashMap<String, String>,
}

fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|s| s.to_str()) {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}

fn cell(record: &StringRecord, column: usize) -> Option<&str> {
    record.get(column - 1).map(str::trim)
}

impl TagTable {
    /// Reads a tag table from a spreadsheet exported as CSV (or TSV, for `.tsv`/`.tab` files).
    /// The first row is a header row.
    pub fn from_path<P: AsRef<Path>>(path: P, columns: TagColumns) -> Result<Self, FastkitError> {
        if columns.code == 0 || columns.tag == 0 {
            return Err(FastkitError::Table(String::from(
                "column positions are 1-based",
            )));
        }
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter_for(path))
            .from_reader(file);

        let mut table = TagTable::default();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            // +2: 1-based, and the header row
            let row = row_idx + 2;
            let (Some(code), Some(tag)) = (cell(&record, columns.code), cell(&record, columns.tag))
            else {
                debug!("{}: row {} is too short, skipped", path.display(), row);
                continue;
            };
            if code.is_empty() || tag.is_empty() {
                continue;
            }
            table.insert(clean_code(code), tag);
        }
        debug!("{}: loaded {} tags", path.display(), table.len());
        Ok(table)
    }

    pub fn insert(&mut self, code: impl Into<String>, tag: impl Into<String>) {
        self.tags.insert(code.into(), tag.into());
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.tags.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
