
use crate::{
    backend::ConditionFactory,
    error::EvalError,
    obs::{self, EvalEvent},
    target::{ConditionOf, Target},
};
use std::{
    marker::PhantomData,
    ops::{BitAnd, BitOr, Not},
    rc::Rc,
};

///
/// PredicateBuilder
///
/// The atomic unit: a deferred function from a context and a live backend to
/// one boolean condition. Builders are pure with respect to the tree; any
/// side effect goes through the backend (distinct marking, relation
/// navigation) and is order-dependent relative to backend state.
///

pub type PredicateBuilder<C> =
    dyn Fn(&C, &mut <C as Target>::Backend) -> Result<ConditionOf<C>, EvalError>;

///
/// Specification
///
/// An immutable, composable wrapper around one [`PredicateBuilder`], tied to
/// the most specific context level the builder requires. `E` tags the entity
/// (or scalar) the specification applies to and must match the context's
/// subject; `C` is a single invariant context parameter.
///
/// Soundness rests on a construction-time discipline: factories are generic
/// over any context satisfying their lattice bound, so a specification only
/// ever instantiates at contexts its builder can serve. Once instantiated,
/// combinators require the same `C` on both operands — widening happens at
/// factory-instantiation time, never by casting an existing tree. There is no
/// runtime check to get this wrong past the compiler.
///
/// Trees are immutable after construction and reusable across evaluations
/// against different sessions. Whether re-evaluating one tree against the
/// *same* session is safe depends on the builders' session side effects
/// (e.g. a repeated fetch request); that is the caller's responsibility.
///
/// A specification tagged with one subject cannot instantiate at a context
/// addressing a different one:
///
/// ```compile_fail
/// use compspec_core::field;
/// use compspec_core::prelude::*;
///
/// struct Department;
/// struct Employee;
///
/// fn mismatched<C>() -> Specification<Employee, C>
/// where
///     C: PathTarget<Subject = Department> + 'static,
/// {
///     field::eq("first_name", "Chandler")
/// }
/// ```
///

pub struct Specification<E, C>
where
    C: Target<Subject = E>,
{
    builder: Rc<PredicateBuilder<C>>,
    _subject: PhantomData<fn() -> E>,
}

impl<E, C> Specification<E, C>
where
    C: Target<Subject = E> + 'static,
    E: 'static,
{
    /// Wrap a builder. The builder's declared context level must be the
    /// tightest one it needs; wrapping an already-widened builder forfeits
    /// reuse at narrower contexts, not soundness.
    pub fn of(
        builder: impl Fn(&C, &mut C::Backend) -> Result<ConditionOf<C>, EvalError> + 'static,
    ) -> Self {
        Self {
            builder: Rc::new(builder),
            _subject: PhantomData,
        }
    }

    /// Neutral element: evaluates to the backend's empty conjunction. The
    /// default when no filtering is desired, e.g. fetching a relation
    /// without constraining it.
    #[must_use]
    pub fn no_op() -> Self {
        Self::of(|_, backend| {
            obs::emit(EvalEvent::NoOp);
            Ok(backend.always())
        })
    }

    /// Conjunction. Both operands are evaluated — left strictly before
    /// right, with no short-circuit, because either side may carry required
    /// backend side effects — then folded with the backend's `and`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::of(move |target, backend| {
            let left = (*self.builder)(target, backend)?;
            let right = (*other.builder)(target, backend)?;
            obs::emit(EvalEvent::And);

            Ok(backend.and(left, right))
        })
    }

    /// Disjunction. Same evaluation order and totality as [`Self::and`].
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::of(move |target, backend| {
            let left = (*self.builder)(target, backend)?;
            let right = (*other.builder)(target, backend)?;
            obs::emit(EvalEvent::Or);

            Ok(backend.or(left, right))
        })
    }

    /// Negation. Forces full evaluation of the operand, then asks the
    /// backend to negate the resulting condition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::of(move |target, backend| {
            let inner = (*self.builder)(target, backend)?;
            obs::emit(EvalEvent::Not);

            Ok(backend.not(inner))
        })
    }

    /// Terminal operation: realize the tree bottom-up against a live context
    /// and backend. Leaf builders run against `target`; internal nodes fold
    /// with the backend's boolean operators.
    pub fn evaluate(
        &self,
        target: &C,
        backend: &mut C::Backend,
    ) -> Result<ConditionOf<C>, EvalError> {
        obs::emit(EvalEvent::Evaluate);

        (*self.builder)(target, backend)
    }

    /// Escape hatch exposing the wrapped builder, so a specification over a
    /// different context level can delegate into this one after narrowing
    /// the context (field delegation, relation navigation).
    #[must_use]
    pub fn as_builder(&self) -> Rc<PredicateBuilder<C>> {
        Rc::clone(&self.builder)
    }
}

// Cloning shares the builder; trees are immutable so sharing is harmless.
impl<E, C> Clone for Specification<E, C>
where
    C: Target<Subject = E>,
{
    fn clone(&self) -> Self {
        Self {
            builder: Rc::clone(&self.builder),
            _subject: PhantomData,
        }
    }
}

impl<E, C> BitAnd for Specification<E, C>
where
    C: Target<Subject = E> + 'static,
    E: 'static,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<E, C> BitOr for Specification<E, C>
where
    C: Target<Subject = E> + 'static,
    E: 'static,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<E, C> Not for Specification<E, C>
where
    C: Target<Subject = E> + 'static,
    E: 'static,
{
    type Output = Self;

    fn not(self) -> Self {
        Self::not(self)
    }
}
