// Copyright 2023-2024 The Regents of the University of California
// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>

use clap::Parser;
use zyklen::DEFAULT_TEST_RUN_DIR;

#[derive(Parser, Debug)]
#[command(name = "zyklen")]
#[command(author = "Kevin Laeufer <laeufer@berkeley.edu>")]
#[command(version)]
#[command(about = "Prints the final clock cycle count of every trace file in a test run directory.", long_about = None)]
struct Args {
    #[arg(value_name = "TEST_RUN_DIR", default_value = DEFAULT_TEST_RUN_DIR)]
    root: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let rows = zyklen::collect_rows(&args.root)?;
    print!("{}", zyklen::render_table(&rows));
    Ok(())
}
