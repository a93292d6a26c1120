use crate::{backend::ConditionFactory, error::TargetError};

//
// Targets encode the context-specificity lattice as a trait hierarchy:
//
//   ExprTarget  ⊇  PathTarget  ⊇  FromTarget  ⊇  RootTarget
//
// A concrete context type implements the traits down to its level; an entity
// root implements all four. Factories are generic over the minimum level they
// need, so a root context satisfies a path-level factory while a path-only
// context cannot satisfy a join-level one. Substitution errors are compile
// errors, never runtime checks.
//

/// Expression-handle type of a context's backend.
pub type ExprOf<C> = <<C as Target>::Backend as ConditionFactory>::Expr;

/// Condition type of a context's backend.
pub type ConditionOf<C> = <<C as Target>::Backend as ConditionFactory>::Condition;

///
/// Target
///
/// Base contract of every evaluation context: which backend its conditions
/// are built for, and a type tag for whatever it addresses (an entity or a
/// scalar). The tag never carries data; it only pins specifications to the
/// contexts they were written for.
///

pub trait Target {
    type Backend: ConditionFactory;
    type Subject: 'static;
}

///
/// ExprTarget
///
/// Widest lattice level: the context can be read as a single scalar
/// expression handle, suitable for direct comparison against a value.
///

pub trait ExprTarget: Target {
    fn as_expr(&self) -> ExprOf<Self>;
}

///
/// PathTarget
///
/// Navigable level: named fields resolve either to a raw expression handle
/// or to a typed sub-context for further delegation. Unknown fields are a
/// caller error surfaced as [`TargetError`].
///

pub trait PathTarget: ExprTarget {
    /// Typed sub-context addressing one named field.
    type Field<V: 'static>: PathTarget<Subject = V, Backend = Self::Backend> + 'static;

    /// Resolve a named field to a raw expression handle.
    fn expr(&self, field: &str) -> Result<ExprOf<Self>, TargetError>;

    /// Narrow to the typed context of a named field.
    fn get<V: 'static>(&self, field: &str) -> Result<Self::Field<V>, TargetError>;
}

///
/// JoinMode
///
/// `Join` makes a relation available for filtering; `Fetch` additionally
/// requests eager materialization of the relation for this query only.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JoinMode {
    Join,
    Fetch,
}

///
/// FromTarget
///
/// Joinable level: named relations can be joined or fetched, producing the
/// related entity's context. Navigation mutates session state owned by the
/// backend; requesting it at most once per relation per query is a caller
/// contract (duplicate requests risk duplicate-row artifacts).
///

pub trait FromTarget: PathTarget {
    /// Context of a joined or fetched relation.
    type Joined<R: 'static>: FromTarget<Subject = R, Backend = Self::Backend> + 'static;

    fn navigate<R: 'static>(
        &self,
        backend: &mut Self::Backend,
        relation: &str,
        mode: JoinMode,
    ) -> Result<Self::Joined<R>, TargetError>;
}

///
/// RootTarget
///
/// Narrowest lattice level: an entity root, the context a repository hands to
/// `Specification::evaluate`.
///

pub trait RootTarget: FromTarget {}
