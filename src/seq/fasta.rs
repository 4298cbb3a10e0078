// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::FastkitError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

/// Default number of residues per sequence line when writing (same as Biopython).
pub const DEFAULT_LINE_WIDTH: usize = 60;

// Lines are read as raw bytes so that non-UTF-8 input is reported as a format error, with its
// line number, rather than as an I/O error.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<SeqFile, FastkitError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (idx, line) in reader.split(b'\n').enumerate() {
        let bytes: Vec<u8> = line?;
        let lineno = idx + 1;
        if let Some(hdr) = bytes.strip_prefix(b">") {
            let hdr = std::str::from_utf8(hdr)
                .map_err(|_| {
                    FastkitError::Format(format!("invalid UTF-8 in header at line {}", lineno))
                })?
                .trim();
            if hdr.is_empty() {
                return Err(FastkitError::Format(format!("empty header at line {}", lineno)));
            }
            // push existing record
            if let Some(rec) = current_record.take() {
                result.push(rec);
            }
            current_record = Some(SeqRecord::new(hdr, String::new()));
        } else {
            // ASCII bytes are valid UTF-8, so the conversion below cannot fail
            let chunk = match std::str::from_utf8(&bytes) {
                Ok(text) if bytes.is_ascii() => text.trim(),
                _ => {
                    return Err(FastkitError::Format(format!(
                        "non-ASCII sequence data at line {}",
                        lineno
                    )))
                }
            };
            if chunk.is_empty() {
                continue;
            }
            match current_record.as_mut() {
                // append line to current record's sequence
                Some(rec) => rec.sequence.push_str(chunk),
                None => {
                    return Err(FastkitError::Format(format!(
                        "expected header line starting with '>' at line {}",
                        lineno
                    )))
                }
            }
        }
    }
    if let Some(rec) = current_record {
        result.push(rec);
    }
    Ok(result)
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, FastkitError> {
    let file = File::open(path)?;
    read_fasta(BufReader::new(file))
}

// A line width of 0 means "do not wrap".
pub fn write_fasta<W: Write>(
    writer: &mut W,
    records: &[SeqRecord],
    line_width: usize,
) -> Result<(), FastkitError> {
    for rec in records {
        writeln!(writer, ">{}", rec.header)?;
        if rec.sequence.is_empty() {
            continue;
        }
        if line_width == 0 {
            writeln!(writer, "{}", rec.sequence)?;
        } else {
            for chunk in rec.sequence.as_bytes().chunks(line_width) {
                writer.write_all(chunk)?;
                writer.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

pub fn write_fasta_file<P: AsRef<Path>>(
    path: P,
    records: &[SeqRecord],
    line_width: usize,
) -> Result<(), FastkitError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_fasta(&mut writer, records, line_width)?;
    writer.flush()?;
    Ok(())
}
