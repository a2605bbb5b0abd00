//! Knob domain value objects — the tagged configuration value
//!
//! [`KnobValue`] is a closed sum over the four primitive kinds a knob can
//! carry. The active kind is fixed at construction: mutation
//! ([`KnobValue::parse_as`] + assignment through the group tree) can replace
//! the payload but never the variant.
//!
//! Access is checked, never coerced:
//!
//! | Accessor | Kind | Mismatch |
//! |----------|------|----------|
//! | [`as_bool`](KnobValue::as_bool) | `Bool` | `DomainError::TypeMismatch` |
//! | [`as_int`](KnobValue::as_int) | `Int` | `DomainError::TypeMismatch` |
//! | [`as_float`](KnobValue::as_float) | `Float` | `DomainError::TypeMismatch` |
//! | [`as_text`](KnobValue::as_text) | `Text` | `DomainError::TypeMismatch` |
//!
//! [`to_display_string`](KnobValue::to_display_string) is the one sanctioned
//! value-to-text coercion, used by the options printer and round-trip tests.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The kind (active variant) of a [`KnobValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnobKind {
    Bool,
    Int,
    Float,
    Text,
}

impl fmt::Display for KnobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KnobKind::Bool => "bool",
            KnobKind::Int => "int",
            KnobKind::Float => "float",
            KnobKind::Text => "text",
        };
        write!(f, "{}", name)
    }
}

/// A typed configuration value: boolean, integer, float, or text.
///
/// Integers are `i64` and floats are `f64`; narrower primitives convert in
/// via [`From`], so construction reads almost typelessly:
///
/// ```
/// use knobset_domain::knob::value_objects::KnobValue;
///
/// let max: KnobValue = 100.into();
/// let label: KnobValue = "fast".into();
/// assert_eq!(max.as_int().unwrap(), 100);
/// assert_eq!(label.as_text().unwrap(), "fast");
/// ```
///
/// Equality and ordering are defined only between values of the same kind
/// and delegate to the primitive. Across kinds `==` is `false` and
/// `partial_cmp` is `None` — there is no silent cross-kind answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KnobValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl KnobValue {
    /// The active kind. Never changes after construction.
    pub fn kind(&self) -> KnobKind {
        match self {
            KnobValue::Bool(_) => KnobKind::Bool,
            KnobValue::Int(_) => KnobKind::Int,
            KnobValue::Float(_) => KnobKind::Float,
            KnobValue::Text(_) => KnobKind::Text,
        }
    }

    // ==================== Checked Accessors ====================

    pub fn as_bool(&self) -> Result<bool, DomainError> {
        match self {
            KnobValue::Bool(b) => Ok(*b),
            other => Err(other.mismatch(KnobKind::Bool)),
        }
    }

    pub fn as_int(&self) -> Result<i64, DomainError> {
        match self {
            KnobValue::Int(i) => Ok(*i),
            other => Err(other.mismatch(KnobKind::Int)),
        }
    }

    pub fn as_float(&self) -> Result<f64, DomainError> {
        match self {
            KnobValue::Float(f) => Ok(*f),
            other => Err(other.mismatch(KnobKind::Float)),
        }
    }

    pub fn as_text(&self) -> Result<&str, DomainError> {
        match self {
            KnobValue::Text(s) => Ok(s),
            other => Err(other.mismatch(KnobKind::Text)),
        }
    }

    fn mismatch(&self, expected: KnobKind) -> DomainError {
        DomainError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    // ==================== Text Conversion ====================

    /// Render any kind as text: `"true"`/`"false"` for booleans, canonical
    /// decimal form for numbers, text verbatim.
    pub fn to_display_string(&self) -> String {
        match self {
            KnobValue::Bool(true) => "true".to_string(),
            KnobValue::Bool(false) => "false".to_string(),
            KnobValue::Int(i) => i.to_string(),
            KnobValue::Float(f) => f.to_string(),
            KnobValue::Text(s) => s.clone(),
        }
    }

    /// Parse `input` as a value of `kind`.
    ///
    /// This is the typed mutation path: booleans accept exactly `true` or
    /// `false`, integers and floats parse their canonical decimal forms,
    /// text is taken verbatim. Malformed input is
    /// [`DomainError::InvalidValue`] and leaves nothing assigned.
    pub fn parse_as(kind: KnobKind, input: &str) -> Result<KnobValue, DomainError> {
        let invalid = || DomainError::InvalidValue {
            kind,
            input: input.to_string(),
        };
        match kind {
            KnobKind::Bool => match input {
                "true" => Ok(KnobValue::Bool(true)),
                "false" => Ok(KnobValue::Bool(false)),
                _ => Err(invalid()),
            },
            KnobKind::Int => input.parse().map(KnobValue::Int).map_err(|_| invalid()),
            KnobKind::Float => input.parse().map(KnobValue::Float).map_err(|_| invalid()),
            KnobKind::Text => Ok(KnobValue::Text(input.to_string())),
        }
    }
}

/// Same-kind values order like their primitives; cross-kind pairs have no
/// ordering. Floats follow IEEE-754 (`NaN` is unordered even with itself).
impl PartialOrd for KnobValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (KnobValue::Bool(a), KnobValue::Bool(b)) => a.partial_cmp(b),
            (KnobValue::Int(a), KnobValue::Int(b)) => a.partial_cmp(b),
            (KnobValue::Float(a), KnobValue::Float(b)) => a.partial_cmp(b),
            (KnobValue::Text(a), KnobValue::Text(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

// The initializing value alone picks a knob's type; a `From` impl per
// primitive keeps construction almost typeless.

impl From<bool> for KnobValue {
    fn from(b: bool) -> Self {
        KnobValue::Bool(b)
    }
}

impl From<i64> for KnobValue {
    fn from(i: i64) -> Self {
        KnobValue::Int(i)
    }
}

impl From<i32> for KnobValue {
    fn from(i: i32) -> Self {
        KnobValue::Int(i64::from(i))
    }
}

impl From<f64> for KnobValue {
    fn from(f: f64) -> Self {
        KnobValue::Float(f)
    }
}

impl From<f32> for KnobValue {
    fn from(f: f32) -> Self {
        KnobValue::Float(f64::from(f))
    }
}

impl From<&str> for KnobValue {
    fn from(s: &str) -> Self {
        KnobValue::Text(s.to_string())
    }
}

impl From<String> for KnobValue {
    fn from(s: String) -> Self {
        KnobValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Accessor Tests ====================

    #[test]
    fn test_matching_accessors() {
        assert!(KnobValue::from(true).as_bool().unwrap());
        assert_eq!(KnobValue::from(777).as_int().unwrap(), 777);
        assert_eq!(KnobValue::from(3.25).as_float().unwrap(), 3.25);
        assert_eq!(KnobValue::from("I'm a knob").as_text().unwrap(), "I'm a knob");
    }

    #[test]
    fn test_wrong_kind_access_is_type_mismatch() {
        let value = KnobValue::from(100);
        assert_eq!(
            value.as_text().unwrap_err(),
            DomainError::TypeMismatch {
                expected: KnobKind::Text,
                actual: KnobKind::Int,
            }
        );
        assert!(value.as_bool().is_err());
        assert!(value.as_float().is_err());
        assert!(value.as_int().is_ok());
    }

    #[test]
    fn test_kind_tracks_variant() {
        assert_eq!(KnobValue::from(false).kind(), KnobKind::Bool);
        assert_eq!(KnobValue::from(1).kind(), KnobKind::Int);
        assert_eq!(KnobValue::from(1.0).kind(), KnobKind::Float);
        assert_eq!(KnobValue::from("x").kind(), KnobKind::Text);
    }

    // ==================== Display String Tests ====================

    #[test]
    fn test_display_string_bool() {
        assert_eq!(KnobValue::from(true).to_display_string(), "true");
        assert_eq!(KnobValue::from(false).to_display_string(), "false");
    }

    #[test]
    fn test_display_string_text_is_identity() {
        assert_eq!(KnobValue::from("1.2.3").to_display_string(), "1.2.3");
    }

    #[test]
    fn test_display_string_numbers_round_trip() {
        let int = KnobValue::from(-42);
        let reparsed = KnobValue::parse_as(KnobKind::Int, &int.to_display_string()).unwrap();
        assert_eq!(reparsed, int);

        let float = KnobValue::from(3.14);
        let reparsed = KnobValue::parse_as(KnobKind::Float, &float.to_display_string()).unwrap();
        assert_eq!(reparsed, float);
    }

    // ==================== parse_as Tests ====================

    #[test]
    fn test_parse_as_accepts_canonical_forms() {
        assert_eq!(
            KnobValue::parse_as(KnobKind::Bool, "false").unwrap(),
            KnobValue::Bool(false)
        );
        assert_eq!(
            KnobValue::parse_as(KnobKind::Int, "200").unwrap(),
            KnobValue::Int(200)
        );
        assert_eq!(
            KnobValue::parse_as(KnobKind::Float, "0.5").unwrap(),
            KnobValue::Float(0.5)
        );
        assert_eq!(
            KnobValue::parse_as(KnobKind::Text, "--anything").unwrap(),
            KnobValue::Text("--anything".to_string())
        );
    }

    #[test]
    fn test_parse_as_rejects_malformed_input() {
        let error = KnobValue::parse_as(KnobKind::Int, "fast").unwrap_err();
        assert_eq!(
            error,
            DomainError::InvalidValue {
                kind: KnobKind::Int,
                input: "fast".to_string(),
            }
        );
        assert!(KnobValue::parse_as(KnobKind::Bool, "yes").is_err());
        assert!(KnobValue::parse_as(KnobKind::Float, "1.2.3").is_err());
    }

    // ==================== Comparison Tests ====================

    #[test]
    fn test_same_kind_ordering_delegates_to_primitive() {
        assert!(KnobValue::from(1) < KnobValue::from(2));
        assert!(KnobValue::from(2.5) >= KnobValue::from(2.5));
        assert!(KnobValue::from("a") < KnobValue::from("b"));
        assert!(KnobValue::from(false) < KnobValue::from(true));
    }

    #[test]
    fn test_cross_kind_comparison_is_undefined() {
        let int = KnobValue::from(1);
        let text = KnobValue::from("1");
        assert_ne!(int, text);
        assert_eq!(int.partial_cmp(&text), None);
        assert!(!(int < text) && !(int > text));
    }

    #[test]
    fn test_nan_is_unordered() {
        let nan = KnobValue::from(f64::NAN);
        assert_eq!(nan.partial_cmp(&nan), None);
        assert_ne!(nan, nan.clone());
    }
}
