use thiserror::Error as ThisError;

///
/// TargetError
///
/// Navigation precondition violations surfaced by a context: a named field or
/// relation does not exist on the entity the context addresses. Reported by
/// the navigation capability, never handled locally.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TargetError {
    #[error("unknown field '{field}' on '{target}'")]
    UnknownField { target: String, field: String },

    #[error("unknown relation '{relation}' on '{target}'")]
    UnknownRelation { target: String, relation: String },
}

impl TargetError {
    #[must_use]
    pub fn unknown_field(target: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            target: target.into(),
            field: field.into(),
        }
    }

    #[must_use]
    pub fn unknown_relation(target: impl Into<String>, relation: impl Into<String>) -> Self {
        Self::UnknownRelation {
            target: target.into(),
            relation: relation.into(),
        }
    }
}

///
/// BackendError
///
/// The condition factory cannot build a requested condition for the given
/// arguments (e.g., membership over an empty set). Propagated to the caller
/// of `evaluate` unchanged; the engine does not catch or translate it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// EvalError
///
/// Everything a deferred evaluation pass can report. Construction of
/// specification trees is infallible; failures only surface when a tree is
/// realized against a live context and backend.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EvalError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Target(#[from] TargetError),
}
