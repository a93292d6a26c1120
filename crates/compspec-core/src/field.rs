//! Field-level specification factories.
//!
//! These need a navigable context (`PathTarget`): each one resolves a named
//! field and compares its expression against a value, or narrows to the
//! field's typed sub-context and delegates a nested specification into it.

use crate::{
    backend::ConditionFactory,
    spec::Specification,
    target::PathTarget,
    value::{FieldValue, Value},
};

/// Narrow to the typed context of `name` and delegate `inner` into it. This
/// is how a per-field specification (e.g. an ordering bound on a date field)
/// is reused from the owning entity's level.
pub fn at<E, V, C>(
    name: &'static str,
    inner: Specification<V, C::Field<V>>,
) -> Specification<E, C>
where
    C: PathTarget<Subject = E> + 'static,
    E: 'static,
    V: 'static,
{
    let builder = inner.as_builder();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        let narrowed = target.get::<V>(name)?;

        (*builder)(&narrowed, backend)
    })
}

/// `name == value`.
pub fn eq<E, C>(name: &'static str, value: impl FieldValue) -> Specification<E, C>
where
    C: PathTarget<Subject = E> + 'static,
    E: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.equal(target.expr(name)?, value.clone())?)
    })
}

/// `name > value`.
pub fn gt<E, C>(name: &'static str, value: impl FieldValue) -> Specification<E, C>
where
    C: PathTarget<Subject = E> + 'static,
    E: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.greater_than(target.expr(name)?, value.clone())?)
    })
}

/// `name >= value`.
pub fn gte<E, C>(name: &'static str, value: impl FieldValue) -> Specification<E, C>
where
    C: PathTarget<Subject = E> + 'static,
    E: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.greater_than_or_equal(target.expr(name)?, value.clone())?)
    })
}

/// `name < value`.
pub fn lt<E, C>(name: &'static str, value: impl FieldValue) -> Specification<E, C>
where
    C: PathTarget<Subject = E> + 'static,
    E: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.less_than(target.expr(name)?, value.clone())?)
    })
}

/// `name <= value`.
pub fn lte<E, C>(name: &'static str, value: impl FieldValue) -> Specification<E, C>
where
    C: PathTarget<Subject = E> + 'static,
    E: 'static,
{
    let value = value.to_value();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.less_than_or_equal(target.expr(name)?, value.clone())?)
    })
}

/// `name` is a member of `values`.
pub fn in_iter<E, C, I>(name: &'static str, values: I) -> Specification<E, C>
where
    C: PathTarget<Subject = E> + 'static,
    E: 'static,
    I: IntoIterator,
    I::Item: FieldValue,
{
    let values: Vec<Value> = values.into_iter().map(|v| v.to_value()).collect();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        Ok(backend.is_in(target.expr(name)?, values.clone())?)
    })
}
