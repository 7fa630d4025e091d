//! Command-line driver for one validate-and-write cycle.
//!
//! Loads the validation module named by the single positional argument
//! (default `validator.wasm`), feeds it the contents of `data.bin`,
//! and writes the raw result bytes to `res.bin`. Guest log lines go to
//! stdout. Exits nonzero on any load, symbol-resolution, or I/O
//! failure.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use valhost_harness::{GuestModule, HostConfig, StdoutSink};

/// Input artifact read in full before invocation.
const INPUT_PATH: &str = "data.bin";

/// Output artifact holding the raw result bytes.
const OUTPUT_PATH: &str = "res.bin";

/// Module path used when no argument is given.
const DEFAULT_MODULE_PATH: &str = "validator.wasm";

fn run() -> anyhow::Result<()> {
    let module_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MODULE_PATH.to_string());

    let module = GuestModule::from_file(Path::new(&module_path), HostConfig::default())
        .with_context(|| format!("cannot load '{}'", module_path))?;

    let input = std::fs::read(INPUT_PATH).with_context(|| format!("cannot open '{}'", INPUT_PATH))?;

    let mut instance = module.instantiate(Arc::new(StdoutSink))?;
    instance.init()?;
    let result = instance.validate(&input)?;

    std::fs::write(OUTPUT_PATH, &result)
        .with_context(|| format!("cannot write '{}'", OUTPUT_PATH))?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
