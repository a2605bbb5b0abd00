//! Group domain — the knob tree
//!
//! Groups organize knobs into a hierarchical namespace with path-qualified
//! lookup and a one-way mutable→finalized transition per node.
//!
//! - [`entities::Group`] — tree node: knobs, subgroups, mutability flag
//! - [`value_objects::KnobMatch`] — a lookup hit with its colon-joined path

pub mod entities;
pub mod value_objects;
