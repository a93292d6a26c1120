//! Expression-level specification factories.
//!
//! Each factory is generic over any context satisfying `ExprTarget`, so one
//! factory instantiates unchanged at a field path, a joined relation, or an
//! entity root — the lattice bound does the widening, no casts involved.

use crate::{
    backend::ConditionFactory,
    spec::Specification,
    target::ExprTarget,
    value::{FieldValue, Value},
};

/// The context's expression equals `value`.
pub fn equal<V, C>(value: impl FieldValue) -> Specification<V, C>
where
    C: ExprTarget<Subject = V> + 'static,
    V: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.equal(target.as_expr(), value.clone())?)
    })
}

/// The context's expression orders strictly above `value`.
pub fn greater_than<V, C>(value: impl FieldValue) -> Specification<V, C>
where
    C: ExprTarget<Subject = V> + 'static,
    V: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.greater_than(target.as_expr(), value.clone())?)
    })
}

/// The context's expression orders at or above `value`.
pub fn greater_than_or_equal<V, C>(value: impl FieldValue) -> Specification<V, C>
where
    C: ExprTarget<Subject = V> + 'static,
    V: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.greater_than_or_equal(target.as_expr(), value.clone())?)
    })
}

/// The context's expression orders strictly below `value`.
pub fn less_than<V, C>(value: impl FieldValue) -> Specification<V, C>
where
    C: ExprTarget<Subject = V> + 'static,
    V: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.less_than(target.as_expr(), value.clone())?)
    })
}

/// The context's expression orders at or below `value`.
pub fn less_than_or_equal<V, C>(value: impl FieldValue) -> Specification<V, C>
where
    C: ExprTarget<Subject = V> + 'static,
    V: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.less_than_or_equal(target.as_expr(), value.clone())?)
    })
}

/// The context's expression is a member of `values`. Whether an empty set is
/// expressible is the backend's call; a rejection propagates unchanged.
pub fn is_in<V, C, I>(values: I) -> Specification<V, C>
where
    C: ExprTarget<Subject = V> + 'static,
    V: 'static,
    I: IntoIterator,
    I::Item: FieldValue,
{
    let values: Vec<Value> = values.into_iter().map(|v| v.to_value()).collect();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.is_in(target.as_expr(), values.clone())?)
    })
}
