//! Domain error types

use crate::knob::value_objects::KnobKind;
use thiserror::Error;

/// Domain-level errors
///
/// Every failure in the knob system is one of these four shapes. Wrong-kind
/// access and malformed textual values are programmer/input errors surfaced
/// eagerly; [`FrozenGroup`](DomainError::FrozenGroup) and
/// [`UnknownKnob`](DomainError::UnknownKnob) let mutation callers branch on
/// *why* a change did not apply instead of guessing from a silent no-op.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: KnobKind, actual: KnobKind },

    #[error("Group owning '{path}' is finalized")]
    FrozenGroup { path: String },

    #[error("Unknown knob: {name}")]
    UnknownKnob { name: String },

    #[error("Invalid {kind} value: '{input}'")]
    InvalidValue { kind: KnobKind, input: String },
}

impl DomainError {
    /// Check if this error came from a mutation attempt on a finalized group
    pub fn is_frozen(&self) -> bool {
        matches!(self, DomainError::FrozenGroup { .. })
    }
}
