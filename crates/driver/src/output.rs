/// Colored result output for a generator run.
///
///   [OK]    path (N solvers) (green)
///   [FAIL]  error detail (red)
use std::path::Path;

use colored::Colorize;

use smt_bindgen::BindgenError;

pub fn print_success(path: &Path, solver_count: usize) {
    eprintln!(
        "  {}  {} ({solver_count} solvers)",
        "[OK]".green().bold(),
        path.display(),
    );
}

pub fn print_failure(err: &BindgenError) {
    eprintln!("  {}  {err}", "[FAIL]".red().bold());
}
