use crate::{error::BackendError, value::Value};

///
/// ConditionFactory
///
/// Capability contract the engine consumes from the query backend. A factory
/// turns expression handles and values into boolean condition nodes and
/// composes them; both `Condition` and `Expr` stay opaque to the engine.
///
/// The boolean composers (`always`, `and`, `or`, `not`) are total and free of
/// side effects. The comparison constructors may reject their arguments with
/// a [`BackendError`]. `mark_distinct` is the one sanctioned session mutation
/// at this boundary; relation navigation mutates the session through
/// [`FromTarget::navigate`](crate::target::FromTarget::navigate) instead.
///
/// A factory is neither `Sync` nor reentrant by contract: one session, one
/// sequential evaluation pass.
///

pub trait ConditionFactory {
    type Condition;
    type Expr;

    /// The backend's "true": an empty conjunction.
    fn always(&mut self) -> Self::Condition;

    fn and(&mut self, left: Self::Condition, right: Self::Condition) -> Self::Condition;

    fn or(&mut self, left: Self::Condition, right: Self::Condition) -> Self::Condition;

    fn not(&mut self, inner: Self::Condition) -> Self::Condition;

    fn equal(&mut self, expr: Self::Expr, value: Value) -> Result<Self::Condition, BackendError>;

    fn greater_than(
        &mut self,
        expr: Self::Expr,
        value: Value,
    ) -> Result<Self::Condition, BackendError>;

    fn greater_than_or_equal(
        &mut self,
        expr: Self::Expr,
        value: Value,
    ) -> Result<Self::Condition, BackendError>;

    fn less_than(
        &mut self,
        expr: Self::Expr,
        value: Value,
    ) -> Result<Self::Condition, BackendError>;

    fn less_than_or_equal(
        &mut self,
        expr: Self::Expr,
        value: Value,
    ) -> Result<Self::Condition, BackendError>;

    fn is_in(
        &mut self,
        expr: Self::Expr,
        values: Vec<Value>,
    ) -> Result<Self::Condition, BackendError>;

    /// Mark the enclosing query as returning distinct results.
    fn mark_distinct(&mut self);
}
