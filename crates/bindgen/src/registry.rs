//! The fixed registry of supported solver integrations.
//!
//! Each [`SolverDescription`] names one integration: its kind, the solver
//! implementation type, and the matching configuration type. Constructor
//! shapes are declared as data (a small manifest per type) so that
//! [`crate::validate`] can check them by comparison before anything is
//! emitted. The set is small and static; it is rebuilt on every run and
//! never mutated.

/// Qualified name of the context capability type. Every solver constructor
/// must take exactly one parameter of this type.
pub const CONTEXT_TYPE: &str = "smt_core::context::SolverContext";

/// Qualified name of the configuration-builder capability type. Every
/// configuration constructor must take exactly one parameter of this type.
pub const CONFIG_BUILDER_TYPE: &str = "smt_core::config::ConfigBuilder";

/// One declared constructor: the ordered list of its parameter type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtorSig {
    pub params: &'static [&'static str],
}

/// A type referenced by qualified name, together with the manifest of its
/// constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef {
    pub qualified_name: &'static str,
    pub constructors: &'static [CtorSig],
}

impl TypeRef {
    /// Number of constructors taking exactly one parameter of `param_type`.
    pub fn matching_unary_ctors(&self, param_type: &str) -> usize {
        self.constructors
            .iter()
            .filter(|sig| sig.params == [param_type])
            .count()
    }
}

/// Description of one supported solver integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverDescription {
    /// Kind identifier, matching a variant of the consumer's `SolverKind`.
    pub kind_name: &'static str,
    /// The solver implementation type.
    pub solver_type: TypeRef,
    /// The solver's configuration type.
    pub config_type: TypeRef,
}

impl SolverDescription {
    /// Identifier used for the generated lazy bindings (`Z3` -> `Z3`).
    pub fn binding_ident(&self) -> String {
        self.kind_name.to_uppercase()
    }
}

const CONTEXT_CTOR: CtorSig = CtorSig {
    params: &[CONTEXT_TYPE],
};

const BUILDER_CTOR: CtorSig = CtorSig {
    params: &[CONFIG_BUILDER_TYPE],
};

/// The built-in registry, in emission order.
///
/// Order is cosmetic: nothing in the generated code depends on it.
static BUILTIN: [SolverDescription; 4] = [
    SolverDescription {
        kind_name: "Z3",
        solver_type: TypeRef {
            qualified_name: "smt_z3::Z3Solver",
            constructors: &[CONTEXT_CTOR],
        },
        config_type: TypeRef {
            qualified_name: "smt_z3::Z3SolverConfig",
            constructors: &[BUILDER_CTOR],
        },
    },
    SolverDescription {
        kind_name: "Cvc5",
        solver_type: TypeRef {
            qualified_name: "smt_cvc5::Cvc5Solver",
            constructors: &[CONTEXT_CTOR],
        },
        config_type: TypeRef {
            qualified_name: "smt_cvc5::Cvc5SolverConfig",
            constructors: &[BUILDER_CTOR],
        },
    },
    SolverDescription {
        kind_name: "Yices",
        solver_type: TypeRef {
            qualified_name: "smt_yices::YicesSolver",
            constructors: &[CONTEXT_CTOR],
        },
        config_type: TypeRef {
            qualified_name: "smt_yices::YicesSolverConfig",
            constructors: &[BUILDER_CTOR],
        },
    },
    SolverDescription {
        kind_name: "Bitwuzla",
        solver_type: TypeRef {
            qualified_name: "smt_bitwuzla::BitwuzlaSolver",
            constructors: &[CONTEXT_CTOR],
        },
        config_type: TypeRef {
            qualified_name: "smt_bitwuzla::BitwuzlaSolverConfig",
            constructors: &[BUILDER_CTOR],
        },
    },
];

/// The fixed ordered sequence of supported solvers.
pub fn builtin_registry() -> &'static [SolverDescription] {
    &BUILTIN
}
