// Copyright 2023-2024 The Regents of the University of California
// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Discovery of trace files in a test run directory.

use crate::{Result, ZyklenError};
use std::path::{Path, PathBuf};

/// Conventional name of the directory that simulators write their test outputs to.
pub const DEFAULT_TEST_RUN_DIR: &str = "test_run_dir";

/// Suffix that identifies a waveform trace file. Matching is case-sensitive.
pub const TRACE_FILE_EXT: &str = ".vcd";

/// A trace file discovered inside a test run directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFile {
    pub path: PathBuf,
    /// Name of the simulated module, i.e., the file name without its extension.
    pub module: String,
    /// Name of the test that produced the trace, i.e., the parent directory name.
    pub test: String,
}

/// Enumerates all trace files in the immediate subdirectories of `root`.
///
/// Each subdirectory represents one test and is scanned exactly one level deep.
/// Results are returned in raw directory listing order, which is not sorted.
pub fn scan_test_run_dir<P: AsRef<Path>>(root: P) -> Result<Vec<TraceFile>> {
    let root = root.as_ref();
    let mut traces = Vec::new();
    for entry in list_dir(root)? {
        let test_dir = entry.path();
        if !test_dir.is_dir() {
            continue;
        }
        let test = entry.file_name().to_string_lossy().into_owned();
        for file in list_dir(&test_dir)? {
            let name = file.file_name().to_string_lossy().into_owned();
            if let Some(module) = name.strip_suffix(TRACE_FILE_EXT) {
                traces.push(TraceFile {
                    path: file.path(),
                    module: module.to_string(),
                    test: test.clone(),
                });
            }
        }
    }
    Ok(traces)
}

/// Collects the entries of a single directory, turning any I/O failure into
/// the fatal directory access error.
fn list_dir(path: &Path) -> Result<Vec<std::fs::DirEntry>> {
    let to_err = |e| ZyklenError::DirectoryAccess(path.to_path_buf(), e);
    std::fs::read_dir(path)
        .map_err(to_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(to_err)
}
