// Copyright 2023-2024 The Regents of the University of California
// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>

mod report;
mod scan;
mod trace;

/// Cargo.toml version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ZyklenError {
    #[error("failed to list test run directory `{0}`: {1}")]
    DirectoryAccess(std::path::PathBuf, std::io::Error),
    #[error("failed to read trace file `{0}`: {1}")]
    TraceRead(std::path::PathBuf, std::io::Error),
    #[error("[trace] malformed timestamp marker: `{0}`")]
    MalformedTimestamp(String),
}

pub type Result<T> = std::result::Result<T, ZyklenError>;

pub use report::{collect_rows, render_table, ReportRow};
pub use scan::{scan_test_run_dir, TraceFile, DEFAULT_TEST_RUN_DIR, TRACE_FILE_EXT};
pub use trace::{read_final_cycles, timestamp_to_cycles};
