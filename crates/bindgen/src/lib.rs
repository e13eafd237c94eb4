//! # smt-bindgen
//!
//! Build-time generator for the static dispatch bindings of the built-in
//! SMT solver integrations (Z3, CVC5, Yices2, Bitwuzla).
//!
//! The generator validates each registry entry's declared constructor
//! shape against the context and configuration-builder capability types,
//! renders the binding fragments, and writes a single `solver_utils.rs`
//! into a caller-supplied output directory. Validation failures abort the
//! run before any output exists.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use smt_bindgen::{builtin_registry, generate};
//!
//! let path = generate(builtin_registry(), Path::new("gen"), "smt_core").unwrap();
//! println!("wrote {}", path.display());
//! ```

pub mod emit;
pub mod error;
pub mod registry;
pub mod render;
pub mod validate;

// Re-export primary items for ergonomic use
pub use emit::{generate, OUTPUT_FILE_NAME};
pub use error::BindgenError;
pub use registry::{builtin_registry, SolverDescription};
