//! Knob entity — a named, described configuration value

use crate::core::error::DomainError;
use crate::knob::value_objects::{KnobKind, KnobValue};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A named, typed, described configuration value.
///
/// Knobs are created once at configuration-assembly time and are logically
/// immutable afterwards; the only mutation path is the owning group's gated
/// [`change_value`](crate::group::entities::Group::change_value), which
/// replaces the payload but can never change the kind.
///
/// Comparisons delegate to the underlying [`KnobValue`] — the name and
/// description are identity and documentation, not ordering keys. Two knobs
/// of different kinds compare like their values do: unequal and unordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Knob {
    name: String,
    value: KnobValue,
    description: String,
}

impl Knob {
    /// Create a knob; the initializing value picks the kind.
    pub fn new(name: impl Into<String>, value: impl Into<KnobValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> KnobKind {
        self.value.kind()
    }

    pub fn value(&self) -> &KnobValue {
        &self.value
    }

    // ==================== Value Delegation ====================

    pub fn as_bool(&self) -> Result<bool, DomainError> {
        self.value.as_bool()
    }

    pub fn as_int(&self) -> Result<i64, DomainError> {
        self.value.as_int()
    }

    pub fn as_float(&self) -> Result<f64, DomainError> {
        self.value.as_float()
    }

    pub fn as_text(&self) -> Result<&str, DomainError> {
        self.value.as_text()
    }

    pub fn to_display_string(&self) -> String {
        self.value.to_display_string()
    }

    /// Replace the payload by parsing `input` against this knob's kind.
    ///
    /// The kind is preserved by construction: the replacement is parsed as
    /// the current kind or rejected. Callers go through the owning group's
    /// mutability gate; this method itself performs no gating.
    pub(crate) fn assign_text(&mut self, input: &str) -> Result<(), DomainError> {
        self.value = KnobValue::parse_as(self.value.kind(), input)?;
        Ok(())
    }
}

impl PartialEq for Knob {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Knob {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}
