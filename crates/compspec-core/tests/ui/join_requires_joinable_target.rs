// A relation factory must not instantiate at a context that stops at the
// path level of the lattice.

use compspec_core::prelude::*;
use compspec_core::relation;
use std::marker::PhantomData;

struct Backend;

impl ConditionFactory for Backend {
    type Condition = ();
    type Expr = String;

    fn always(&mut self) {}

    fn and(&mut self, _: (), _: ()) {}

    fn or(&mut self, _: (), _: ()) {}

    fn not(&mut self, _: ()) {}

    fn equal(&mut self, _: String, _: Value) -> Result<(), BackendError> {
        Ok(())
    }

    fn greater_than(&mut self, _: String, _: Value) -> Result<(), BackendError> {
        Ok(())
    }

    fn greater_than_or_equal(&mut self, _: String, _: Value) -> Result<(), BackendError> {
        Ok(())
    }

    fn less_than(&mut self, _: String, _: Value) -> Result<(), BackendError> {
        Ok(())
    }

    fn less_than_or_equal(&mut self, _: String, _: Value) -> Result<(), BackendError> {
        Ok(())
    }

    fn is_in(&mut self, _: String, _: Vec<Value>) -> Result<(), BackendError> {
        Ok(())
    }

    fn mark_distinct(&mut self) {}
}

struct PathOnly<V: 'static>(String, PhantomData<fn() -> V>);

impl<V: 'static> Target for PathOnly<V> {
    type Backend = Backend;
    type Subject = V;
}

impl<V: 'static> ExprTarget for PathOnly<V> {
    fn as_expr(&self) -> String {
        self.0.clone()
    }
}

impl<V: 'static> PathTarget for PathOnly<V> {
    type Field<V2: 'static> = PathOnly<V2>;

    fn expr(&self, field: &str) -> Result<String, TargetError> {
        Ok(format!("{}.{}", self.0, field))
    }

    fn get<V2: 'static>(&self, field: &str) -> Result<PathOnly<V2>, TargetError> {
        Ok(PathOnly(format!("{}.{}", self.0, field), PhantomData))
    }
}

struct Department;
struct Employee;

fn main() {
    let _ = relation::join::<Department, Employee, PathOnly<Department>>(
        "employees",
        Specification::no_op(),
    );
}
