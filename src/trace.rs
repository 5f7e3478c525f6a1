// Copyright 2023-2024 The Regents of the University of California
// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Extraction of the final timestamp from a waveform trace.

use crate::{Result, ZyklenError};
use std::path::Path;

/// Returns the number of clock cycles covered by the trace file, derived from
/// the last timestamp marker in it. Returns `None` for a trace without any
/// timestamp marker.
pub fn read_final_cycles<P: AsRef<Path>>(path: P) -> Result<Option<u64>> {
    let path = path.as_ref();
    let to_err = |e| ZyklenError::TraceRead(path.to_path_buf(), e);
    let input_file = std::fs::File::open(path).map_err(to_err)?;
    // an empty file cannot be mapped, but it also cannot contain a marker
    if input_file.metadata().map_err(to_err)?.len() == 0 {
        return Ok(None);
    }
    let mmap = unsafe { memmap2::Mmap::map(&input_file).map_err(to_err)? };
    Ok(final_timestamp(&mmap)?.map(timestamp_to_cycles))
}

/// Converts a simulation timestamp into full clock cycles. Every cycle
/// consists of two logged half-period edges.
pub fn timestamp_to_cycles(timestamp: u64) -> u64 {
    timestamp / 2
}

/// Finds the value of the last timestamp marker in the trace body.
///
/// Timestamps are assumed to be non-decreasing throughout the file, so a single
/// forward pass that retains the last marker line is equivalent to scanning
/// backwards from the end.
pub(crate) fn final_timestamp(bytes: &[u8]) -> Result<Option<u64>> {
    let mut last = None;
    for line in bytes.split(|&b| b == b'\n') {
        if is_marker_line(line) {
            last = Some(line);
        }
    }
    match last {
        Some(line) => parse_marker(line).map(Some),
        None => Ok(None),
    }
}

/// A line marks a timestamp iff it starts with `#` followed by a decimal digit.
fn is_marker_line(line: &[u8]) -> bool {
    line.len() >= 2 && line[0] == b'#' && line[1].is_ascii_digit()
}

/// Parses the maximal digit run after the `#`. Anything following the digits,
/// like a fractional part or a trailing command, is ignored.
fn parse_marker(line: &[u8]) -> Result<u64> {
    debug_assert!(is_marker_line(line));
    let digits = &line[1..];
    let end = digits
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let malformed = || ZyklenError::MalformedTimestamp(String::from_utf8_lossy(line).into_owned());
    let value_str = std::str::from_utf8(&digits[..end]).map_err(|_| malformed())?;
    value_str.parse::<u64>().map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &[u8]) -> Option<u64> {
        final_timestamp(input).unwrap()
    }

    #[test]
    fn test_final_timestamp() {
        let input = b"$timescale 1ps $end\n$enddefinitions $end\n#0\n0!\n1\"\n#500\n1!\n#2000\n0!\n";
        assert_eq!(scan(input), Some(2000));
    }

    #[test]
    fn test_forward_pass_keeps_last_marker() {
        assert_eq!(scan(b"#1\n#2\n#3\n"), Some(3));
        // a marker on the very last line without a trailing newline
        assert_eq!(scan(b"#1\n#2\n#42"), Some(42));
    }

    #[test]
    fn test_trailing_content_is_ignored() {
        assert_eq!(scan(b"#0\n#2000 $end\n"), Some(2000));
        // float timestamps as produced by Migen only contribute their integer part
        assert_eq!(scan(b"#12.0\n"), Some(12));
        // CRLF line endings: the digit run stops at the carriage return
        assert_eq!(scan(b"#100\r\n"), Some(100));
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(scan(b""), None);
        assert_eq!(scan(b"$date today $end\n$enddefinitions $end\n"), None);
        // a `#` needs at least one digit to count as a marker
        assert_eq!(scan(b"#\n#x17\nb1010 #\n"), None);
        // value changes of a signal with id `#2!` must not look like markers
        assert_eq!(scan(b"1#2!\n"), None);
    }

    #[test]
    fn test_malformed_marker() {
        // 21 digits do not fit into a u64
        let r = final_timestamp(b"#0\n#184467440737095516160\n");
        assert!(r.is_err());
        assert!(r
            .err()
            .unwrap()
            .to_string()
            .contains("malformed timestamp marker"));
        // an earlier well formed marker does not win over a malformed last one
        let r = final_timestamp(b"#2000\n#184467440737095516160\n");
        assert!(r.is_err());
    }

    #[test]
    fn test_timestamp_to_cycles() {
        assert_eq!(timestamp_to_cycles(0), 0);
        assert_eq!(timestamp_to_cycles(1), 0);
        assert_eq!(timestamp_to_cycles(101), 50);
        assert_eq!(timestamp_to_cycles(2000), 1000);
        assert_eq!(timestamp_to_cycles(u64::MAX), u64::MAX / 2);
    }
}
