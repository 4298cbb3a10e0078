// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

//! Removal of duplicate sequences.
//!
//! Two records are duplicates iff their full sequences are equal, ignoring (ASCII) case. Of each
//! group of duplicates only the first is kept, under its own identifier.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use log::info;

use crate::errors::FastkitError;
use crate::seq::fasta::{read_fasta_file, write_fasta_file};
use crate::seq::file::SeqFile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DedupOrder {
    // Keep the order of the input file.
    #[default]
    Input,
    // Sort by identifier first (this decides which of a group of duplicates comes first).
    SortedIds,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Duplicate {
    pub kept_id: String,
    pub removed_id: String,
}

#[derive(Debug, Default)]
pub struct Dedup {
    pub kept: SeqFile,
    pub removed: Vec<Duplicate>,
}

fn check_unique_ids(records: &SeqFile) -> Result<(), FastkitError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for rec in records {
        if !seen.insert(rec.id()) {
            return Err(FastkitError::DuplicateId(rec.id().to_string()));
        }
    }
    Ok(())
}

pub fn deduplicate(mut records: SeqFile, order: DedupOrder) -> Result<Dedup, FastkitError> {
    check_unique_ids(&records)?;
    if order == DedupOrder::SortedIds {
        records.sort_by(|a, b| a.id().cmp(b.id()));
    }

    // lowercased sequence -> index (in `kept`) of its first occurrence
    let mut first_seen: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut result = Dedup::default();
    for rec in records {
        let key = rec.sequence.to_ascii_lowercase();
        match first_seen.get(&key) {
            Some(&idx) => {
                let kept_id = result.kept[idx].id().to_string();
                info!(
                    "Sequence {} is identical to sequence {}. Removing the latter.",
                    kept_id,
                    rec.id()
                );
                result.removed.push(Duplicate {
                    kept_id,
                    removed_id: rec.id().to_string(),
                });
            }
            None => {
                first_seen.insert(key, result.kept.len());
                result.kept.push(rec);
            }
        }
    }
    Ok(result)
}

pub fn unique_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    order: DedupOrder,
    line_width: usize,
) -> Result<Dedup, FastkitError> {
    let records = read_fasta_file(&input)?;
    info!("Loaded {} sequences", records.len());
    let dedup = deduplicate(records, order)?;
    info!("Retained {} sequences", dedup.kept.len());
    write_fasta_file(&output, &dedup.kept, line_width)?;
    Ok(dedup)
}
