// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

//! Renaming of FastA identifiers to `<accession>_<tag>`.
//!
//! The accession code is extracted from the original header (see [`clean_code`]) and the tag is
//! looked up in a [`TagTable`]. Codes without a tag get [`UNKNOWN_TAG`].

pub mod tag_table;

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use log::{info, warn};
use regex::Regex;

use crate::errors::FastkitError;
use crate::seq::fasta::{read_fasta_file, write_fasta_file, DEFAULT_LINE_WIDTH};
use crate::seq::record::SeqRecord;

pub use crate::rename::tag_table::{TagColumns, TagTable};

pub const UNKNOWN_TAG: &str = "UNK";
pub const DEFAULT_OUTPUT_DIR: &str = "processed_files";
pub const FASTA_EXTENSION: &str = "fasta";

// "gi|<gi number>|<db>|<accession>|..."
fn gi_regex() -> &'static Regex {
    static GI_RE: OnceLock<Regex> = OnceLock::new();
    GI_RE.get_or_init(|| Regex::new(r"^gi\|[^|]*\|[^|]*\|([^|\s]+)").expect("valid regex"))
}

fn strip_version(code: &str) -> &str {
    match code.split_once('.') {
        Some((acc, _version)) => acc,
        None => code,
    }
}

/// Extracts the accession code from a FastA header (or a tag table cell). Supported forms:
///
/// * `gi|code1|gb|code2| text` -> `code2`
/// * `code1.x text` -> `code1`
/// * `code1 text` -> `code1`
pub fn clean_code(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(caps) = gi_regex().captures(raw) {
        return strip_version(&caps[1]).to_string();
    }
    let first_token = raw.split_whitespace().next().unwrap_or("");
    strip_version(first_token).to_string()
}

#[derive(Clone, Debug)]
pub struct RenameOptions {
    pub unknown_tag: String,
    pub output_dir: String,
    pub line_width: usize,
}

impl Default for RenameOptions {
    fn default() -> Self {
        RenameOptions {
            unknown_tag: String::from(UNKNOWN_TAG),
            output_dir: String::from(DEFAULT_OUTPUT_DIR),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Returns the renamed record (description dropped), and the accession code if it had no tag.
pub fn rename_record(
    record: &SeqRecord,
    tags: &TagTable,
    unknown_tag: &str,
) -> (SeqRecord, Option<String>) {
    let code = clean_code(&record.header);
    let (tag, missing) = match tags.get(&code) {
        Some(tag) => (tag, None),
        None => {
            warn!(
                "Code {} has no assigned tag. Defaulting to \"{}\"!",
                code, unknown_tag
            );
            (unknown_tag, Some(code.clone()))
        }
    };
    let renamed = SeqRecord::new(format!("{}_{}", code, tag), record.sequence.clone());
    (renamed, missing)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameSummary {
    pub files: Vec<PathBuf>,
    pub records: usize,
    pub untagged: Vec<String>,
}

pub fn rename_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    tags: &TagTable,
    options: &RenameOptions,
) -> Result<RenameSummary, FastkitError> {
    let records = read_fasta_file(&input)?;
    let mut untagged: Vec<String> = Vec::new();
    let renamed: Vec<SeqRecord> = records
        .iter()
        .map(|rec| {
            let (new_rec, missing) = rename_record(rec, tags, &options.unknown_tag);
            untagged.extend(missing);
            new_rec
        })
        .collect();
    write_fasta_file(&output, &renamed, options.line_width)?;
    info!(
        "Renamed {} sequences: {} -> {}",
        renamed.len(),
        input.as_ref().display(),
        output.as_ref().display()
    );
    Ok(RenameSummary {
        files: vec![output.as_ref().to_path_buf()],
        records: renamed.len(),
        untagged,
    })
}

// Regular files directly under `folder` with a .fasta extension, sorted by name.
pub fn list_fasta_files(folder: &Path) -> Result<Vec<PathBuf>, FastkitError> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(FASTA_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Renames every FastA file in `folder`, writing the results to `folder/<output_dir>/` under the
/// same file names.
pub fn rename_folder<P: AsRef<Path>>(
    folder: P,
    tags: &TagTable,
    options: &RenameOptions,
) -> Result<RenameSummary, FastkitError> {
    let folder = folder.as_ref();
    let fasta_files = list_fasta_files(folder)?;
    let mut summary = RenameSummary::default();
    if fasta_files.is_empty() {
        warn!("No FASTA file in given directory {}", folder.display());
        return Ok(summary);
    }

    let out_dir = folder.join(&options.output_dir);
    if !out_dir.is_dir() {
        fs::create_dir_all(&out_dir)?;
    }

    for input in &fasta_files {
        let Some(fname) = input.file_name() else {
            continue;
        };
        let file_summary = rename_file(input, out_dir.join(fname), tags, options)?;
        summary.files.extend(file_summary.files);
        summary.records += file_summary.records;
        summary.untagged.extend(file_summary.untagged);
    }
    info!(
        "Renamed {} sequences in {} files ({} without tag)",
        summary.records,
        summary.files.len(),
        summary.untagged.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_code_gi() {
        assert_eq!(clean_code("gi|12345|gb|AB000003.2| Homo sapiens"), "AB000003");
        assert_eq!(clean_code("gi|12345|gb|AB000003|"), "AB000003");
    }

    #[test]
    fn test_clean_code_versioned() {
        assert_eq!(clean_code("AB000001.1 Homo sapiens mitochondrion"), "AB000001");
        // dots in the description do not matter
        assert_eq!(clean_code("AB000001 isolate v1.2"), "AB000001");
    }

    #[test]
    fn test_clean_code_plain() {
        assert_eq!(clean_code("AB000002 Homo sapiens"), "AB000002");
        assert_eq!(clean_code("AB000002"), "AB000002");
        assert_eq!(clean_code("  AB000002  "), "AB000002");
    }

    #[test]
    fn test_clean_code_short_gi_falls_through() {
        // Not enough fields for the gi form: treated as a plain code.
        assert_eq!(clean_code("gi|12345 partial"), "gi|12345");
        // Accessions that merely start with "gi" are not mistaken for the gi form.
        assert_eq!(clean_code("gix123.1 text"), "gix123");
    }

    #[test]
    fn test_rename_record_tagged() {
        let mut tags = TagTable::default();
        tags.insert("AB000001", "M7a");
        let rec = SeqRecord::new("AB000001.1 Homo sapiens", "ACGT");
        let (renamed, missing) = rename_record(&rec, &tags, UNKNOWN_TAG);
        assert_eq!(renamed.header, "AB000001_M7a");
        assert_eq!(renamed.description(), None);
        assert_eq!(renamed.sequence, "ACGT");
        assert_eq!(missing, None);
    }

    #[test]
    fn test_rename_record_untagged() {
        let tags = TagTable::default();
        let rec = SeqRecord::new("gi|1|gb|AB000009.1| x", "AC");
        let (renamed, missing) = rename_record(&rec, &tags, UNKNOWN_TAG);
        assert_eq!(renamed.header, "AB000009_UNK");
        assert_eq!(missing.as_deref(), Some("AB000009"));
    }
}
