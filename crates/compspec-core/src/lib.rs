//! Core engine for compspec: target traits (the context-specificity lattice),
//! the backend capability boundary, `Specification` and its combinators, the
//! factory surface, and the evaluation trace sink.
#![warn(unreachable_pub)]

pub mod backend;
pub mod error;
pub mod expr;
pub mod field;
pub mod obs;
pub mod relation;
pub mod spec;
pub mod target;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary. No mocks, fixtures, or helpers
/// are re-exported here.
///

pub mod prelude {
    pub use crate::{
        backend::ConditionFactory,
        error::{BackendError, EvalError, TargetError},
        spec::{PredicateBuilder, Specification},
        target::{ExprTarget, FromTarget, JoinMode, PathTarget, RootTarget, Target},
        value::{FieldValue, Value},
    };
}
