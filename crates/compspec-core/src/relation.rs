//! Relation-level specification factories.
//!
//! These need a joinable context (`FromTarget`): each one navigates a named
//! relation and delegates the inner specification against the related
//! entity's context. Both factories mark the query distinct, because a
//! to-many navigation would otherwise duplicate the owning entity once per
//! matching related row.
//!
//! Navigation is a session side effect; requesting the same relation more
//! than once per query is a caller error the engine does not de-duplicate.
//! A caller that needs both filtering and eager loading on one relation
//! should use a single [`fetch`] rather than a [`join`]/[`fetch`] pair.
//!
//! A context that stops at the path level of the lattice cannot carry a
//! relation factory:
//!
//! ```compile_fail
//! use compspec_core::prelude::*;
//! use compspec_core::relation;
//!
//! struct Department;
//! struct Employee;
//!
//! fn join_at_path_level<C>() -> Specification<Department, C>
//! where
//!     C: PathTarget<Subject = Department> + 'static,
//! {
//!     relation::join::<Department, Employee, C>("employees", Specification::no_op())
//! }
//! ```

use crate::{
    backend::ConditionFactory,
    spec::Specification,
    target::{FromTarget, JoinMode},
};

/// Join `relation` and delegate `inner` against the joined context.
pub fn join<E, R, C>(
    relation: &'static str,
    inner: Specification<R, C::Joined<R>>,
) -> Specification<E, C>
where
    C: FromTarget<Subject = E> + 'static,
    E: 'static,
    R: 'static,
{
    navigate(relation, JoinMode::Join, inner)
}

/// Fetch `relation` — eagerly materializing it for this query — and delegate
/// `inner` against the fetched context. Pass `Specification::no_op()` to
/// fetch without filtering.
pub fn fetch<E, R, C>(
    relation: &'static str,
    inner: Specification<R, C::Joined<R>>,
) -> Specification<E, C>
where
    C: FromTarget<Subject = E> + 'static,
    E: 'static,
    R: 'static,
{
    navigate(relation, JoinMode::Fetch, inner)
}

fn navigate<E, R, C>(
    relation: &'static str,
    mode: JoinMode,
    inner: Specification<R, C::Joined<R>>,
) -> Specification<E, C>
where
    C: FromTarget<Subject = E> + 'static,
    E: 'static,
    R: 'static,
{
    let builder = inner.as_builder();

    Specification::of(move |target: &C, backend: &mut C::Backend| {
        backend.mark_distinct();
        let joined = target.navigate::<R>(backend, relation, mode)?;

        (*builder)(&joined, backend)
    })
}
