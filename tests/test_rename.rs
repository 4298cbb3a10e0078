// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

mod common;

use crate::common::utils;

use fastkit::rename::{rename_folder, RenameOptions, TagColumns, TagTable};

fn tags() -> TagTable {
    TagTable::from_path("tests/data/tags.csv", TagColumns::default()).unwrap()
}

#[test]
fn renames_all_fasta_files_of_a_folder() {
    let dir = utils::scratch_dir("rename-folder");
    utils::copy_files("tests/data/folder".as_ref(), &dir);

    let summary = rename_folder(&dir, &tags(), &RenameOptions::default()).unwrap();
    assert_eq!(summary.records, 3);
    assert_eq!(summary.untagged, vec![String::from("AB000009")]);
    assert_eq!(
        summary.files,
        vec![
            dir.join("processed_files").join("batch1.fasta"),
            dir.join("processed_files").join("batch2.fasta"),
        ]
    );
    // non-FastA files are left alone
    assert!(!dir.join("processed_files").join("notes.txt").exists());

    insta::assert_snapshot!(utils::read_text(&summary.files[0]), @r"
    >AB000001_M7a
    ACGTACGTAC
    >AB000002_D4
    GGGGCCCC
    ");
    insta::assert_snapshot!(utils::read_text(&summary.files[1]), @r"
    >AB000009_UNK
    TTTT
    ");
}

#[test]
fn custom_sentinel_and_output_dir() {
    let dir = utils::scratch_dir("rename-options");
    utils::copy_files("tests/data/folder".as_ref(), &dir);
    let options = RenameOptions {
        unknown_tag: String::from("NA"),
        output_dir: String::from("renamed"),
        line_width: 4,
    };

    let summary = rename_folder(&dir, &tags(), &options).unwrap();
    assert_eq!(summary.files.len(), 2);
    let text = utils::read_text(&dir.join("renamed").join("batch2.fasta"));
    assert_eq!(text, ">AB000009_NA\nTTTT\n");
}

#[test]
fn empty_folder_is_not_an_error() {
    let dir = utils::scratch_dir("rename-empty");
    let summary = rename_folder(&dir, &tags(), &RenameOptions::default()).unwrap();
    assert_eq!(summary.records, 0);
    assert!(summary.files.is_empty());
    assert!(!dir.join("processed_files").exists());
}

#[test]
fn rerun_reuses_output_dir() {
    let dir = utils::scratch_dir("rename-rerun");
    utils::copy_files("tests/data/folder".as_ref(), &dir);
    rename_folder(&dir, &tags(), &RenameOptions::default()).unwrap();
    let summary = rename_folder(&dir, &tags(), &RenameOptions::default()).unwrap();
    // files under processed_files/ are not picked up again
    assert_eq!(summary.files.len(), 2);
}
