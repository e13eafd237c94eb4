//! File emission.
//!
//! Validates the whole registry, renders every fragment, and writes the
//! result in one `fs::write`. Validation happens for all entries before
//! the output path is touched, so a failing entry never leaves a
//! truncated-but-plausible file behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BindgenError;
use crate::registry::SolverDescription;
use crate::render::render_file;
use crate::validate::validate_registry;

/// Fixed name of the generated file inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "solver_utils.rs";

/// Generate the bindings file for `registry` under `out_dir`.
///
/// Returns the path of the written file. Overwrites any existing file at
/// that path. On any validation error, nothing is created.
pub fn generate(
    registry: &[SolverDescription],
    out_dir: &Path,
    package: &str,
) -> Result<PathBuf, BindgenError> {
    validate_registry(registry)?;

    let contents = render_file(registry, package);
    let path = out_dir.join(OUTPUT_FILE_NAME);

    fs::create_dir_all(out_dir).map_err(|e| BindgenError::Io {
        path: out_dir.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(&path, contents).map_err(|e| BindgenError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), solvers = registry.len(), "bindings written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{builtin_registry, CtorSig, SolverDescription, TypeRef};

    #[test]
    fn generate_writes_the_rendered_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = generate(builtin_registry(), dir.path(), "pkg.generated").unwrap();

        assert_eq!(path, dir.path().join(OUTPUT_FILE_NAME));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_file(builtin_registry(), "pkg.generated"));
    }

    #[test]
    fn generate_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE_NAME);
        fs::write(&path, "stale contents").unwrap();

        generate(builtin_registry(), dir.path(), "pkg").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale contents"));
    }

    #[test]
    fn generate_creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("gen").join("bindings");
        let path = generate(builtin_registry(), &nested, "pkg").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn validation_failure_writes_nothing() {
        let bad = SolverDescription {
            kind_name: "Broken",
            solver_type: TypeRef {
                qualified_name: "broken::BrokenSolver",
                constructors: &[CtorSig {
                    params: &["broken::Context", "u32"],
                }],
            },
            config_type: TypeRef {
                qualified_name: "broken::BrokenConfig",
                constructors: &[],
            },
        };
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");

        let err = generate(&[bad], &nested, "pkg").unwrap_err();
        assert!(matches!(
            err,
            BindgenError::MissingSolverConstructor { kind: "Broken", .. }
        ));
        assert!(!nested.exists());
    }
}
