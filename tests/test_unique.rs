// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

mod common;

use crate::common::utils;

use fastkit::{
    seq::fasta::read_fasta_file,
    unique::{unique_file, DedupOrder},
};

#[test]
fn keeps_first_occurrence_in_file_order() {
    let dir = utils::scratch_dir("unique-input");
    let out = dir.join("unique.fasta");
    let dedup = unique_file("tests/data/dups.fasta", &out, DedupOrder::Input, 60).unwrap();
    assert_eq!(dedup.removed.len(), 2);

    insta::assert_snapshot!(utils::read_text(&out), @r"
    >zeta
    ACGTACGTAA
    >alpha
    TTTTGGGGCC
    >gamma
    TTTTGGGGC
    ");
}

#[test]
fn sorted_ids_mode() {
    let dir = utils::scratch_dir("unique-sorted");
    let out = dir.join("unique.fasta");
    let dedup = unique_file("tests/data/dups.fasta", &out, DedupOrder::SortedIds, 60).unwrap();

    let kept: Vec<String> = read_fasta_file(&out)
        .unwrap()
        .iter()
        .map(|r| r.id().to_string())
        .collect();
    // alpha < beta < delta < gamma < zeta; delta duplicates alpha, zeta duplicates beta
    assert_eq!(kept, vec!["alpha", "beta", "gamma"]);
    let removed: Vec<(&str, &str)> = dedup
        .removed
        .iter()
        .map(|d| (d.kept_id.as_str(), d.removed_id.as_str()))
        .collect();
    assert_eq!(removed, vec![("alpha", "delta"), ("beta", "zeta")]);
}

#[test]
fn descriptions_survive() {
    let dir = utils::scratch_dir("unique-desc");
    let out = dir.join("unique.fasta");
    unique_file("tests/data/test2.fasta", &out, DedupOrder::Input, 0).unwrap();
    let kept = read_fasta_file(&out).unwrap();
    // record 3 is a lowercase copy of record 2
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[1].description(), Some("Homo sapiens isolate X2"));
}
