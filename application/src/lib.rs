//! Application layer for knobset
//!
//! This crate contains use cases over the knob tree. It depends only on
//! the domain layer.

pub mod use_cases;

// Re-export commonly used types
pub use use_cases::apply_options::{ApplyOptionsInput, ApplyOptionsOutput, ApplyOptionsUseCase};
