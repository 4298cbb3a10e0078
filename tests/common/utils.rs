// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

// A fresh, empty directory under the system temp dir; unique per test.
pub fn scratch_dir(tag: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("fastkit-{}-{}-{}", tag, std::process::id(), n));
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("remove old scratch dir");
    }
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

// Copies the regular files of `src` (not recursively) into `dst`.
pub fn copy_files(src: &Path, dst: &Path) {
    for entry in fs::read_dir(src).expect("read fixture dir") {
        let path = entry.expect("dir entry").path();
        if path.is_file() {
            fs::copy(&path, dst.join(path.file_name().unwrap())).expect("copy fixture");
        }
    }
}

pub fn read_text(path: &Path) -> String {
    fs::read_to_string(path).expect("read output")
}
