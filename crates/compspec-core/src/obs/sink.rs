//! Evaluation trace boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! evaluation semantics. Combinators emit through this module only; with no
//! sink installed every emission is a no-op.

use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn EvalTraceSink>> = RefCell::new(None);
}

///
/// EvalEvent
///
/// One fold observed while a specification tree is realized. `Evaluate` fires
/// once per entry through `Specification::evaluate`; the remaining variants
/// fire per combinator node, after the node's operands have been resolved.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvalEvent {
    Evaluate,
    NoOp,
    And,
    Or,
    Not,
}

///
/// EvalTraceSink
///

pub trait EvalTraceSink {
    fn record(&self, event: EvalEvent);
}

/// Run `f` with a temporary trace sink override.
pub fn with_trace_sink<T>(sink: &dyn EvalTraceSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn EvalTraceSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // Preconditions:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` always restores the previous slot on all exits, including panic.
    // - `emit` only dereferences synchronously and never persists `sink_ptr`.
    //
    // Aliasing:
    // - We erase lifetime to a raw pointer, but still only expose shared access.
    // - No mutable alias to the same sink is introduced by this conversion.
    //
    // What would break this:
    // - Any async/deferred use of `sink_ptr` beyond this scope.
    // - Any path that bypasses Guard restoration.
    let sink_ptr =
        unsafe { std::mem::transmute::<&dyn EvalTraceSink, *const dyn EvalTraceSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

pub(crate) fn emit(event: EvalEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // Preconditions:
        // - `ptr` was produced from a valid `&dyn EvalTraceSink` in `with_trace_sink`.
        // - `with_trace_sink` always restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `emit` is synchronous and never stores `ptr` beyond this call.
        //
        // Aliasing:
        // - We materialize only a shared reference (`&dyn EvalTraceSink`), matching
        //   the original shared borrow used to install the override.
        // - No mutable alias to the same sink is created here.
        //
        // What would break this:
        // - If `with_trace_sink` failed to restore on all exits (normal + panic),
        //   `ptr` could outlive the borrowed sink and become dangling.
        // - If `emit` were changed to store or dispatch asynchronously using `ptr`,
        //   lifetime assumptions would no longer hold.
        unsafe { (&*ptr).record(event) };
    }
}
