//! Constructor-shape validation.
//!
//! Checks every registry entry's declared constructor manifest against the
//! capability types before any output is rendered. A mismatch is fatal for
//! the whole run: emitting a binding for a constructor that does not exist
//! would produce code that cannot compile, so the generator fails fast and
//! writes nothing.

use crate::error::BindgenError;
use crate::registry::{SolverDescription, CONFIG_BUILDER_TYPE, CONTEXT_TYPE};

/// Check that the entry's solver type declares exactly one constructor
/// taking a single context-typed argument.
pub fn validate_solver_constructor(entry: &SolverDescription) -> Result<(), BindgenError> {
    if entry.solver_type.matching_unary_ctors(CONTEXT_TYPE) != 1 {
        return Err(BindgenError::MissingSolverConstructor {
            kind: entry.kind_name,
            type_name: entry.solver_type.qualified_name,
        });
    }
    Ok(())
}

/// Check that the entry's config type declares exactly one constructor
/// taking a single builder-typed argument.
pub fn validate_config_constructor(entry: &SolverDescription) -> Result<(), BindgenError> {
    if entry.config_type.matching_unary_ctors(CONFIG_BUILDER_TYPE) != 1 {
        return Err(BindgenError::MissingConfigConstructor {
            kind: entry.kind_name,
            type_name: entry.config_type.qualified_name,
        });
    }
    Ok(())
}

/// Validate every entry, both sides, before anything is written.
pub fn validate_registry(registry: &[SolverDescription]) -> Result<(), BindgenError> {
    for entry in registry {
        validate_solver_constructor(entry)?;
        validate_config_constructor(entry)?;
        tracing::debug!(kind = entry.kind_name, "constructor shapes validated");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{builtin_registry, CtorSig, TypeRef};

    fn entry_with_solver_ctors(ctors: &'static [CtorSig]) -> SolverDescription {
        SolverDescription {
            kind_name: "Fake",
            solver_type: TypeRef {
                qualified_name: "fake::FakeSolver",
                constructors: ctors,
            },
            config_type: TypeRef {
                qualified_name: "fake::FakeSolverConfig",
                constructors: &[CtorSig {
                    params: &[CONFIG_BUILDER_TYPE],
                }],
            },
        }
    }

    #[test]
    fn builtin_registry_validates() {
        assert_eq!(validate_registry(builtin_registry()), Ok(()));
    }

    #[test]
    fn two_argument_constructor_is_rejected() {
        let entry = entry_with_solver_ctors(&[CtorSig {
            params: &[CONTEXT_TYPE, "u32"],
        }]);
        let err = validate_solver_constructor(&entry).unwrap_err();
        assert_eq!(
            err,
            BindgenError::MissingSolverConstructor {
                kind: "Fake",
                type_name: "fake::FakeSolver",
            }
        );
    }

    #[test]
    fn constructor_with_wrong_param_type_is_rejected() {
        let entry = entry_with_solver_ctors(&[CtorSig {
            params: &["fake::OtherContext"],
        }]);
        assert!(validate_solver_constructor(&entry).is_err());
    }

    #[test]
    fn no_constructors_is_rejected() {
        let entry = entry_with_solver_ctors(&[]);
        assert!(validate_solver_constructor(&entry).is_err());
    }

    #[test]
    fn duplicate_matching_constructors_are_rejected() {
        let entry = entry_with_solver_ctors(&[
            CtorSig {
                params: &[CONTEXT_TYPE],
            },
            CtorSig {
                params: &[CONTEXT_TYPE],
            },
        ]);
        assert!(validate_solver_constructor(&entry).is_err());
    }

    #[test]
    fn config_side_failure_names_config_type() {
        let entry = SolverDescription {
            kind_name: "Fake",
            solver_type: TypeRef {
                qualified_name: "fake::FakeSolver",
                constructors: &[CtorSig {
                    params: &[CONTEXT_TYPE],
                }],
            },
            config_type: TypeRef {
                qualified_name: "fake::FakeSolverConfig",
                constructors: &[CtorSig { params: &[] }],
            },
        };
        let err = validate_registry(std::slice::from_ref(&entry)).unwrap_err();
        assert_eq!(
            err,
            BindgenError::MissingConfigConstructor {
                kind: "Fake",
                type_name: "fake::FakeSolverConfig",
            }
        );
    }

    #[test]
    fn registry_failure_reports_first_bad_entry() {
        let good = builtin_registry()[0];
        let bad = entry_with_solver_ctors(&[]);
        let err = validate_registry(&[good, bad]).unwrap_err();
        assert!(matches!(
            err,
            BindgenError::MissingSolverConstructor { kind: "Fake", .. }
        ));
    }
}
