//! Template rendering for the generated bindings file.
//!
//! Pure functions mapping registry entries to Rust source fragments. No
//! I/O, fully deterministic: the same registry and package name always
//! produce byte-identical output, so fragments are testable by direct
//! string comparison.
//!
//! The emitted code uses constructor registration instead of dynamic
//! loading: each integration crate registers its constructors under its
//! qualified type name, and the per-solver `LazyLock` bindings resolve
//! that table on first use. A missing integration therefore fails only
//! when its kind is actually requested.

use crate::registry::SolverDescription;

/// File banner, capability imports, and the constructor type aliases.
///
/// `package` is the consumer crate the generated module belongs to; it
/// appears only in the banner.
pub fn render_header(package: &str) -> String {
    format!(
        "\
//! Static dispatch bindings for the built-in SMT solver integrations.
//!
//! Generated by smt-bindgen for inclusion in `{package}`; do not edit.

use std::collections::HashMap;
use std::sync::{{LazyLock, RwLock}};

use smt_core::config::{{ConfigBuilder, SolverConfig}};
use smt_core::context::SolverContext;
use smt_core::solver::{{Solver, SolverKind}};

/// A function that consumes a configuration builder and produces a
/// concrete configuration value.
pub type ConfigConstructor<C> = fn(ConfigBuilder) -> C;

/// Constructor for a solver implementation.
pub type SolverCtor = fn(&SolverContext) -> Box<dyn Solver>;

/// Constructor for a boxed solver configuration.
pub type ConfigCtor = ConfigConstructor<Box<dyn SolverConfig>>;
"
    )
}

/// The binding error type, the registration tables, and the generic
/// constructor-loader pair.
pub fn render_loaders() -> String {
    "\
// ---------------------------------------------------------------------------
// Constructor registration
// ---------------------------------------------------------------------------

/// Error raised by the generated bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// No integration has registered a constructor under this type name.
    UnregisteredConstructor(String),
    /// A custom solver kind was routed through the generated dispatch.
    CustomKind,
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingError::UnregisteredConstructor(name) => write!(
                f,
                \"no constructor registered for `{name}`; is the integration crate linked and initialized?\"
            ),
            BindingError::CustomKind => write!(
                f,
                \"custom solver kinds cannot be constructed through the generated bindings; construct the solver directly\"
            ),
        }
    }
}

impl std::error::Error for BindingError {}

static SOLVER_CONSTRUCTORS: LazyLock<RwLock<HashMap<&'static str, SolverCtor>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

static CONFIG_CONSTRUCTORS: LazyLock<RwLock<HashMap<&'static str, ConfigCtor>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Register the constructor for a solver implementation type.
///
/// Called once by each integration crate during its initialization.
pub fn register_solver_constructor(type_name: &'static str, ctor: SolverCtor) {
    SOLVER_CONSTRUCTORS.write().unwrap().insert(type_name, ctor);
}

/// Register the constructor for a solver configuration type.
pub fn register_config_constructor(type_name: &'static str, ctor: ConfigCtor) {
    CONFIG_CONSTRUCTORS.write().unwrap().insert(type_name, ctor);
}

/// Look up the solver constructor registered under a qualified type name.
fn load_solver_constructor(type_name: &str) -> Result<SolverCtor, BindingError> {
    SOLVER_CONSTRUCTORS
        .read()
        .unwrap()
        .get(type_name)
        .copied()
        .ok_or_else(|| BindingError::UnregisteredConstructor(type_name.to_string()))
}

/// Look up the config constructor registered under a qualified type name.
fn load_config_constructor(type_name: &str) -> Result<ConfigCtor, BindingError> {
    CONFIG_CONSTRUCTORS
        .read()
        .unwrap()
        .get(type_name)
        .copied()
        .ok_or_else(|| BindingError::UnregisteredConstructor(type_name.to_string()))
}
"
    .to_string()
}

/// The lazy solver/config constructor bindings for one registry entry.
///
/// Resolution runs on first access and is cached, so the generated file
/// loads even when this entry's integration crate is absent.
pub fn render_bindings(entry: &SolverDescription) -> String {
    let ident = entry.binding_ident();
    format!(
        "\
/// Lazily resolved constructor for the {kind} solver.
static {ident}_SOLVER: LazyLock<Result<SolverCtor, BindingError>> =
    LazyLock::new(|| load_solver_constructor(\"{solver_ty}\"));

/// Lazily resolved constructor for the {kind} solver configuration.
static {ident}_CONFIG: LazyLock<Result<ConfigCtor, BindingError>> =
    LazyLock::new(|| load_config_constructor(\"{config_ty}\"));
",
        kind = entry.kind_name,
        solver_ty = entry.solver_type.qualified_name,
        config_ty = entry.config_type.qualified_name,
    )
}

/// The implementation-type-to-kind table and its accessor.
pub fn render_kind_table(registry: &[SolverDescription]) -> String {
    let mut out = String::from(
        "\
// ---------------------------------------------------------------------------
// Kind lookup
// ---------------------------------------------------------------------------

static SOLVER_KINDS: LazyLock<HashMap<&'static str, SolverKind>> = LazyLock::new(|| {
    HashMap::from([
",
    );
    for entry in registry {
        out.push_str(&format!(
            "        (\"{}\", SolverKind::{}),\n",
            entry.solver_type.qualified_name, entry.kind_name
        ));
    }
    out.push_str(
        "\
    ])
});

/// Map an implementation type name to its solver kind.
///
/// Returns [`SolverKind::Custom`] for implementations unknown to the
/// generator.
pub fn solver_kind_of(type_name: &str) -> SolverKind {
    SOLVER_KINDS
        .get(type_name)
        .copied()
        .unwrap_or(SolverKind::Custom)
}
",
    );
    out
}

/// The two public dispatch functions, exhaustive over `SolverKind`.
pub fn render_dispatch(registry: &[SolverDescription]) -> String {
    let mut out = String::from(
        "\
// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Construct a new solver of the given kind against `context`.
pub fn create_solver(
    kind: SolverKind,
    context: &SolverContext,
) -> Result<Box<dyn Solver>, BindingError> {
    match kind {
",
    );
    for entry in registry {
        out.push_str(&format!(
            "        SolverKind::{} => Ok({}_SOLVER.clone()?(context)),\n",
            entry.kind_name,
            entry.binding_ident()
        ));
    }
    out.push_str(
        "\
        SolverKind::Custom => Err(BindingError::CustomKind),
    }
}

/// Return the configuration constructor for the given kind.
pub fn config_constructor(kind: SolverKind) -> Result<ConfigCtor, BindingError> {
    match kind {
",
    );
    for entry in registry {
        out.push_str(&format!(
            "        SolverKind::{} => {}_CONFIG.clone(),\n",
            entry.kind_name,
            entry.binding_ident()
        ));
    }
    out.push_str(
        "\
        SolverKind::Custom => Err(BindingError::CustomKind),
    }
}
",
    );
    out
}

/// Render the whole file: fragments in fixed order, blank-line separated.
pub fn render_file(registry: &[SolverDescription], package: &str) -> String {
    let mut fragments = vec![render_header(package), render_loaders()];
    fragments.extend(registry.iter().map(render_bindings));
    fragments.push(render_kind_table(registry));
    fragments.push(render_dispatch(registry));
    fragments.join("\n")
}
