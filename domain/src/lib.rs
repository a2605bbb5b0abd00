//! Domain layer for knobset
//!
//! This crate contains the core business logic of the knob system:
//! typed configuration values, the hierarchical group tree, and the
//! command-line option parser. It has no I/O and no dependencies on
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Knob
//!
//! A named constant of one of very few kinds (boolean / integer / float /
//! text), tagged in a single value type so knobs of any kind live together
//! in one container and the initializing value picks the type.
//!
//! ## Group
//!
//! A node in a tree of knobs and subgroups: path-qualified lookup
//! (`root:feature-A:A-X:A-X-val2`), depth-first traversal, and a one-way
//! mutable→finalized transition that gates value changes per node.
//!
//! ## Option parsing
//!
//! `--name value`, `--flag`, and `--no-flag` tokens map onto typed knob
//! mutations; tokens that match nothing pass through unconsumed.

pub mod core;
pub mod group;
pub mod knob;
pub mod options;

// Re-export commonly used types
pub use core::{error::DomainError, string::wrap};
pub use group::{entities::Group, value_objects::KnobMatch};
pub use knob::{
    entities::Knob,
    static_knob::StaticKnob,
    value_objects::{KnobKind, KnobValue},
};
pub use options::{
    parser::parse_options,
    report::{AppliedOption, ParseReport, RejectedOption},
};
