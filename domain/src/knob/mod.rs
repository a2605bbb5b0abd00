//! Knob domain — typed configuration values
//!
//! A knob is a named constant of one of very few kinds
//! (boolean / integer / float / text). Modeling all kinds as one tagged
//! value keeps knobs easy to hold in containers and lets the initializing
//! value alone decide a knob's type.
//!
//! - [`value_objects::KnobValue`] — the tagged value and its checked accessors
//! - [`entities::Knob`] — a named, described value
//! - [`static_knob::StaticKnob`] — the compile-time constant variant

pub mod entities;
pub mod static_knob;
pub mod value_objects;
