//! Composable, statically type-checked predicate specifications for
//! criteria-style query backends.
//!
//! ## Crate layout
//! - `core`: target traits (the context lattice), the backend capability
//!   boundary, `Specification` and its combinators, the factory surface,
//!   errors, values, and the evaluation trace sink.
//!
//! The `prelude` module mirrors the surface a downstream per-entity factory
//! crate or repository layer uses.
//!
//! ## Example
//! ```ignore
//! use compspec::prelude::*;
//!
//! // Per-entity factories are plain functions, generic over any context at
//! // least as specific as they need.
//! fn name<C>(value: &str) -> Specification<Department, C>
//! where
//!     C: PathTarget<Subject = Department> + 'static,
//! {
//!     compspec::core::field::eq("name", value)
//! }
//!
//! // departments matching "Sales", with their employees eagerly loaded:
//! // repository.find_one(name("Sales").and(fetch_employees()))
//! ```

pub use compspec_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        backend::ConditionFactory,
        error::{BackendError, EvalError, TargetError},
        expr, field,
        obs::{EvalEvent, EvalTraceSink, with_trace_sink},
        relation,
        spec::{PredicateBuilder, Specification},
        target::{ExprTarget, FromTarget, JoinMode, PathTarget, RootTarget, Target},
        value::{FieldValue, Value},
    };
}
