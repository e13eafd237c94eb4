use std::fmt;
use std::path::PathBuf;

/// Errors from binding generation.
#[derive(Debug)]
pub enum BindgenError {
    /// A solver type's manifest lacks the required single-argument
    /// constructor taking the context capability type.
    MissingSolverConstructor {
        kind: &'static str,
        type_name: &'static str,
    },
    /// A configuration type's manifest lacks the required single-argument
    /// constructor taking the configuration-builder capability type.
    MissingConfigConstructor {
        kind: &'static str,
        type_name: &'static str,
    },
    /// Writing the generated file failed.
    Io { path: PathBuf, message: String },
}

impl fmt::Display for BindgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindgenError::MissingSolverConstructor { kind, type_name } => write!(
                f,
                "solver `{kind}`: type `{type_name}` has no constructor taking a single SolverContext argument"
            ),
            BindgenError::MissingConfigConstructor { kind, type_name } => write!(
                f,
                "solver `{kind}`: config type `{type_name}` has no constructor taking a single ConfigBuilder argument"
            ),
            BindgenError::Io { path, message } => {
                write!(f, "failed to write `{}`: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for BindgenError {}

impl PartialEq for BindgenError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                BindgenError::MissingSolverConstructor { kind: a, type_name: b },
                BindgenError::MissingSolverConstructor { kind: c, type_name: d },
            ) => a == c && b == d,
            (
                BindgenError::MissingConfigConstructor { kind: a, type_name: b },
                BindgenError::MissingConfigConstructor { kind: c, type_name: d },
            ) => a == c && b == d,
            (
                BindgenError::Io { path: a, message: b },
                BindgenError::Io { path: c, message: d },
            ) => a == c && b == d,
            _ => false,
        }
    }
}
