//! Output formatter trait

use knobset_domain::Group;

/// Trait for rendering a knob tree
pub trait OptionsFormatter {
    /// Format the help-style option listing, descriptions wrapped to `width`
    fn format_options(&self, knobs: &Group, width: usize) -> String;

    /// Format the effective configuration as `path = value` lines
    fn format_values(&self, knobs: &Group) -> String;

    /// Format the whole tree as JSON
    fn format_json(&self, knobs: &Group) -> String;
}
