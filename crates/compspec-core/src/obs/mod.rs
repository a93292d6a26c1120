pub mod sink;

pub use sink::{EvalEvent, EvalTraceSink, with_trace_sink};

pub(crate) use sink::emit;
