//! Compile-time constant knobs
//!
//! [`StaticKnob`] is the `const` sibling of [`KnobValue`]: the same
//! value-tagging idea, fixed at construction, with no name, no description,
//! no mutation, and no group membership. It exists for feature flags and
//! limits that should be burned in at compile time and branched on with
//! zero runtime cost:
//!
//! ```
//! use knobset_domain::knob::static_knob::StaticKnob;
//!
//! const FEATURE_XXX: StaticKnob = StaticKnob::Bool(true);
//! const LUCKY_NUMBER: StaticKnob = StaticKnob::Int(777);
//!
//! const _: () = assert!(FEATURE_XXX.as_bool());
//! const _: () = assert!(LUCKY_NUMBER.as_int() == 777);
//! ```
//!
//! A wrong-kind accessor panics, which in `const` evaluation is a
//! compile-time error — the mismatch can never reach a running program.
//!
//! [`KnobValue`]: crate::knob::value_objects::KnobValue

/// A tagged constant usable in `const` contexts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticKnob {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl StaticKnob {
    pub const fn as_bool(&self) -> bool {
        match self {
            StaticKnob::Bool(b) => *b,
            _ => panic!("static knob is not a bool"),
        }
    }

    pub const fn as_int(&self) -> i64 {
        match self {
            StaticKnob::Int(i) => *i,
            _ => panic!("static knob is not an int"),
        }
    }

    pub const fn as_float(&self) -> f64 {
        match self {
            StaticKnob::Float(f) => *f,
            _ => panic!("static knob is not a float"),
        }
    }

    pub const fn as_text(&self) -> &'static str {
        match self {
            StaticKnob::Text(s) => s,
            _ => panic!("static knob is not text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEATURE_ENABLED: StaticKnob = StaticKnob::Bool(true);
    const PRESSURE_LIMIT: StaticKnob = StaticKnob::Float(20.0);
    const VERSION: StaticKnob = StaticKnob::Text("0.1.1");
    const LUCKY_NUMBER: StaticKnob = StaticKnob::Int(777);

    // Compile-time evaluation: a failure here is a build error, not a
    // runtime assertion.
    const _: () = assert!(FEATURE_ENABLED.as_bool());
    const _: () = assert!(PRESSURE_LIMIT.as_float() < 20.1);
    const _: () = assert!(LUCKY_NUMBER.as_int() == 777);

    #[test]
    fn test_static_knob_accessors() {
        assert!(FEATURE_ENABLED.as_bool());
        assert_eq!(LUCKY_NUMBER.as_int(), 777);
        assert_eq!(PRESSURE_LIMIT.as_float(), 20.0);
        assert_eq!(VERSION.as_text(), "0.1.1");
    }

    #[test]
    fn test_static_knob_equality() {
        assert_eq!(VERSION, StaticKnob::Text("0.1.1"));
        assert_ne!(VERSION, StaticKnob::Text("2.3.4"));
        assert_ne!(LUCKY_NUMBER, StaticKnob::Int(666));
    }

    #[test]
    #[should_panic(expected = "static knob is not a bool")]
    fn test_wrong_kind_access_panics() {
        LUCKY_NUMBER.as_bool();
    }
}
