// Copyright 2023-2024 The Regents of the University of California
// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Accumulation and rendering of the cycle count summary.

use crate::scan::scan_test_run_dir;
use crate::trace::read_final_cycles;
use crate::Result;
use std::path::Path;

const HEADER: [&str; 3] = ["module", "test", "cycles"];

/// One line of the cycle count summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub module: String,
    pub test: String,
    /// `None` if the trace contains no timestamp marker or could not be read.
    pub cycles: Option<u64>,
}

/// Derives one report row per trace file found under `root`.
///
/// Rows appear in discovery order. A trace that cannot be read or whose final
/// marker cannot be parsed keeps its row with an absent cycle count; a warning
/// is logged for it. Only a failure to list a directory aborts the scan.
pub fn collect_rows<P: AsRef<Path>>(root: P) -> Result<Vec<ReportRow>> {
    let traces = scan_test_run_dir(root)?;
    let mut rows = Vec::with_capacity(traces.len());
    for trace in traces {
        let cycles = match read_final_cycles(&trace.path) {
            Ok(cycles) => cycles,
            Err(e) => {
                log::warn!("no cycle count for {}: {e}", trace.path.display());
                None
            }
        };
        rows.push(ReportRow {
            module: trace.module,
            test: trace.test,
            cycles,
        });
    }
    Ok(rows)
}

/// Renders the rows as an aligned text table.
///
/// Every column is as wide as its longest entry, module and test names are
/// left justified, the cycle count is right justified and blank when absent.
pub fn render_table(rows: &[ReportRow]) -> String {
    let cells = rows
        .iter()
        .map(|r| {
            [
                r.module.clone(),
                r.test.clone(),
                r.cycles.map(|c| c.to_string()).unwrap_or_default(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = [HEADER[0].len(), HEADER[1].len(), HEADER[2].len()];
    for row in cells.iter() {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = std::cmp::max(*width, cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &widths, &HEADER.map(String::from));
    let dashes = widths.map(|w| "-".repeat(w));
    push_line(&mut out, &widths, &dashes);
    for row in cells.iter() {
        push_line(&mut out, &widths, row);
    }
    out
}

fn push_line(out: &mut String, widths: &[usize; 3], cells: &[String; 3]) {
    let line = format!(
        "{:<module$}  {:<test$}  {:>cycles$}",
        cells[0],
        cells[1],
        cells[2],
        module = widths[0],
        test = widths[1],
        cycles = widths[2],
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(module: &str, test: &str, cycles: Option<u64>) -> ReportRow {
        ReportRow {
            module: module.to_string(),
            test: test.to_string(),
            cycles,
        }
    }

    #[test]
    fn test_render_table() {
        let rows = [
            row("moduleX", "testA", Some(1000)),
            row("moduleY", "testB", None),
            row("alu", "smoke", Some(7)),
        ];
        let expected = "\
module   test   cycles
-------  -----  ------
moduleX  testA    1000
moduleY  testB
alu      smoke       7
";
        assert_eq!(render_table(&rows), expected);
    }

    #[test]
    fn test_render_table_wide_cells() {
        // cells longer than their header widen the column
        let rows = [row("a_very_long_module_name", "integration_test", Some(123456789))];
        let expected = "\
module                   test                 cycles
-----------------------  ----------------  ---------
a_very_long_module_name  integration_test  123456789
";
        assert_eq!(render_table(&rows), expected);
    }

    #[test]
    fn test_render_empty_table() {
        let expected = "\
module  test  cycles
------  ----  ------
";
        assert_eq!(render_table(&[]), expected);
    }
}
