//! smt-bindgen driver: command-line entry point for the binding generator.
//!
//! Usage:
//!   smt-bindgen <out-dir> <package>
//!
//! Writes `<out-dir>/solver_utils.rs` containing the static dispatch
//! bindings for the built-in solver registry, attributed to the given
//! consumer package. Exits non-zero without writing anything if any
//! registry entry fails constructor validation.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use smt_bindgen::{builtin_registry, generate};

fn usage() {
    eprintln!("usage: smt-bindgen <out-dir> <package>");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [out_dir, package] = args.as_slice() else {
        usage();
        return ExitCode::FAILURE;
    };

    match generate(builtin_registry(), &PathBuf::from(out_dir), package) {
        Ok(path) => {
            output::print_success(&path, builtin_registry().len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::print_failure(&err);
            ExitCode::FAILURE
        }
    }
}
