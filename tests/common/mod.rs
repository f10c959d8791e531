#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes `json` to `<dir>/input.json` and returns the path.
pub fn write_input(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("input.json");
    fs::write(&path, json).expect("write input file");
    path
}

/// File names in `dir`, sorted, for asserting exactly which files a
/// conversion produced.
pub fn dir_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Snapshot of every file in `dir` as `(name, bytes)` pairs, sorted by
/// name, for byte-level comparisons across conversion runs.
pub fn snapshot_dir(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut entries: Vec<(String, Vec<u8>)> = fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| {
            let entry = entry.expect("dir entry");
            let name = entry.file_name().to_string_lossy().into_owned();
            let bytes = fs::read(entry.path()).expect("read output file");
            (name, bytes)
        })
        .collect();
    entries.sort();
    entries
}
