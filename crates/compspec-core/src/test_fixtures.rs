//! Department/Employee fixture domain shared across specification tests.
//!
//! The factory modules are shaped exactly like downstream per-entity factory
//! crates: one function per field or relation, generic over any context at
//! least as specific as the function needs.

use crate::{
    expr, field, relation,
    spec::Specification,
    target::{FromTarget, PathTarget},
};
use time::Date;

pub(crate) struct Department;

pub(crate) struct Employee;

pub(crate) mod departments {
    use super::*;

    pub(crate) fn name<C>(value: &str) -> Specification<Department, C>
    where
        C: PathTarget<Subject = Department> + 'static,
    {
        field::eq("name", value)
    }

    pub(crate) fn join_employees<C>(
        spec: Specification<Employee, C::Joined<Employee>>,
    ) -> Specification<Department, C>
    where
        C: FromTarget<Subject = Department> + 'static,
    {
        relation::join("employees", spec)
    }

    pub(crate) fn fetch_employees<C>() -> Specification<Department, C>
    where
        C: FromTarget<Subject = Department> + 'static,
    {
        relation::fetch("employees", Specification::<Employee, C::Joined<Employee>>::no_op())
    }
}

pub(crate) mod employees {
    use super::*;

    pub(crate) fn first_name<C>(value: &str) -> Specification<Employee, C>
    where
        C: PathTarget<Subject = Employee> + 'static,
    {
        field::eq("first_name", value)
    }

    pub(crate) fn second_name<C>(value: &str) -> Specification<Employee, C>
    where
        C: PathTarget<Subject = Employee> + 'static,
    {
        field::eq("second_name", value)
    }

    // Delegation form: reuses an expression-level specification against the
    // field's own narrowed context.
    pub(crate) fn date_of_birth<C>(value: Date) -> Specification<Employee, C>
    where
        C: PathTarget<Subject = Employee> + 'static,
    {
        field::at("date_of_birth", expr::equal::<Date, _>(value))
    }
}
