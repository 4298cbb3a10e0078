// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

//! Subsequence extraction.
//!
//! Ranges use 1-based, inclusive coordinates. A range whose end is smaller than its start is
//! taken to span the end of a circular molecule (e.g. the mtDNA D-loop): it yields the tail of the
//! sequence from `start`, followed by the head up to `end`. Several ranges are joined, in the
//! order given, into a single composite subsequence.


use std::{fmt, path::Path};

use itertools::Itertools;
use log::{debug, info};

use crate::errors::FastkitError;
use crate::seq::fasta::{read_fasta_file, write_fasta_file};
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubseqRange {
    pub start: usize,
    // None <=> up to the end of the sequence
    pub end: Option<usize>,
}

impl SubseqRange {
    pub fn new(start: usize, end: usize) -> Self {
        SubseqRange {
            start,
            end: Some(end),
        }
    }

    pub fn open(start: usize) -> Self {
        SubseqRange { start, end: None }
    }

    pub fn wraps(&self) -> bool {
        matches!(self.end, Some(end) if end < self.start)
    }
}

impl fmt::Display for SubseqRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}-", self.start),
        }
    }
}

/// Groups command-line positions into ranges: pairs of (start, end), with a trailing odd position
/// taken as an open-ended start.
pub fn parse_ranges(positions: &[usize]) -> Result<Vec<SubseqRange>, FastkitError> {
    if positions.is_empty() {
        return Err(FastkitError::Range(String::from("no positions given")));
    }
    if let Some(pos) = positions.iter().position(|&p| p == 0) {
        return Err(FastkitError::Range(format!(
            "position #{} is 0, but positions are 1-based",
            pos + 1
        )));
    }

    let mut ranges: Vec<SubseqRange> = positions
        .iter()
        .tuples()
        .map(|(&start, &end)| SubseqRange::new(start, end))
        .collect();
    if positions.len() % 2 != 0 {
        ranges.push(SubseqRange::open(positions[positions.len() - 1]));
    }
    Ok(ranges)
}

// Slice with 0-based, half-open byte bounds, clamped to the sequence like Python slicing. A bound
// that falls inside a multi-byte character yields an empty slice.
fn clamped_slice(sequence: &str, from: usize, to: usize) -> &str {
    let len = sequence.len();
    let to = to.min(len);
    let from = from.min(to);
    sequence.get(from..to).unwrap_or("")
}

/// Extracts `range` from `sequence`. Positions count bytes, which for sequences read by
/// [`read_fasta`](crate::seq::fasta::read_fasta) (always ASCII) are residues. On non-ASCII input a
/// piece whose bounds split a character is dropped rather than panicking.
pub fn extract_range(sequence: &str, range: &SubseqRange) -> String {
    let len = sequence.len();
    let start = range.start.max(1);
    if start > len || range.end.is_some_and(|end| end > len) {
        debug!("range {} clamped to sequence length {}", range, len);
    }
    match range.end {
        None => clamped_slice(sequence, start - 1, len).to_string(),
        Some(end) if end < start => {
            let mut result = String::with_capacity(len);
            result.push_str(clamped_slice(sequence, start - 1, len));
            result.push_str(clamped_slice(sequence, 0, end));
            result
        }
        Some(end) => clamped_slice(sequence, start - 1, end).to_string(),
    }
}

/// Joins the given ranges of `record`'s sequence. The header is kept as is.
pub fn extract_record(record: &SeqRecord, ranges: &[SubseqRange]) -> SeqRecord {
    let sequence: String = ranges
        .iter()
        .map(|r| extract_range(&record.sequence, r))
        .collect();
    SeqRecord::new(record.header.clone(), sequence)
}

pub fn extract_records(records: &[SeqRecord], ranges: &[SubseqRange]) -> SeqFile {
    records.iter().map(|r| extract_record(r, ranges)).collect()
}

pub fn extract_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    ranges: &[SubseqRange],
    line_width: usize,
) -> Result<usize, FastkitError> {
    let records = read_fasta_file(&input)?;
    info!(
        "Extracting {} from {} sequences in {}",
        ranges.iter().join(" + "),
        records.len(),
        input.as_ref().display()
    );
    let subseqs = extract_records(&records, ranges);
    write_fasta_file(&output, &subseqs, line_width)?;
    info!(
        "Wrote {} subsequences to {}",
        subseqs.len(),
        output.as_ref().display()
    );
    Ok(subseqs.len())
}
