//! Console output formatter for knob trees

use crate::output::formatter::OptionsFormatter;
use colored::Colorize;
use knobset_domain::{Group, KnobValue, wrap};

/// Formats knob trees for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the help-style option listing.
    ///
    /// Each knob renders in depth-first visit order as the invocation that
    /// would produce its current value (`--name [value]` for numbers,
    /// `--name ["text"]` for text, bare `--name` / `--no-name` for
    /// booleans), followed by its description wrapped to `width` columns
    /// and indented two spaces.
    pub fn format_options(knobs: &Group, width: usize) -> String {
        let mut output = String::new();

        knobs.visit(&mut |knob| {
            let invocation = match knob.value() {
                KnobValue::Bool(true) => knob.name().to_string(),
                KnobValue::Bool(false) => format!("no-{}", knob.name()),
                KnobValue::Text(text) => format!("{} [\"{}\"]", knob.name(), text),
                value => format!("{} [{}]", knob.name(), value.to_display_string()),
            };
            output.push_str(&format!("{}{}\n", "--".cyan(), invocation.cyan()));

            for line in wrap(knob.description(), width) {
                output.push_str(&format!("  {}\n", line.dimmed()));
            }
        });

        output
    }

    /// Format the effective configuration, one `path = value` line per
    /// knob in depth-first order.
    pub fn format_values(knobs: &Group) -> String {
        let mut output = String::new();
        Self::append_values(knobs, "", &mut output);
        output
    }

    fn append_values(group: &Group, prefix: &str, output: &mut String) {
        let here = format!("{}{}", prefix, group.name());
        for knob in group.knobs() {
            output.push_str(&format!(
                "{}:{} = {}\n",
                here.dimmed(),
                knob.name().bold(),
                knob.to_display_string()
            ));
        }
        let child_prefix = format!("{}:", here);
        for subgroup in group.subgroups() {
            Self::append_values(subgroup, &child_prefix, output);
        }
    }

    /// Format the whole tree as JSON
    pub fn format_json(knobs: &Group) -> String {
        serde_json::to_string_pretty(knobs).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OptionsFormatter for ConsoleFormatter {
    fn format_options(&self, knobs: &Group, width: usize) -> String {
        Self::format_options(knobs, width)
    }

    fn format_values(&self, knobs: &Group) -> String {
        Self::format_values(knobs)
    }

    fn format_json(&self, knobs: &Group) -> String {
        Self::format_json(knobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Group {
        let mut knobs = Group::new("root");
        knobs
            .add_knob_with("max", 100, "Maximum number of in-flight requests")
            .add_knob("feature-A", true)
            .add_knob("feature-B", false)
            .add_knob("version", "1.2.3");
        knobs.subgroup("cache").add_knob("lines", 512);
        knobs
    }

    #[test]
    fn test_format_options_renders_each_kind() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_options(&sample_tree(), 50);

        assert!(output.contains("--max [100]"));
        assert!(output.contains("--feature-A\n"));
        assert!(output.contains("--no-feature-B\n"));
        assert!(output.contains("--version [\"1.2.3\"]"));
        assert!(output.contains("--lines [512]"));
    }

    #[test]
    fn test_format_options_wraps_descriptions() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_options(&sample_tree(), 20);

        assert!(output.contains("  Maximum number of\n"));
        assert!(output.contains("  in-flight requests\n"));
    }

    #[test]
    fn test_format_values_uses_full_paths() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_values(&sample_tree());

        assert!(output.contains("root:max = 100"));
        assert!(output.contains("root:feature-B = false"));
        assert!(output.contains("root:cache:lines = 512"));
    }

    #[test]
    fn test_format_json_round_trips_structure() {
        let json = ConsoleFormatter::format_json(&sample_tree());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["name"], "root");
        assert_eq!(parsed["subgroups"]["cache"]["knobs"]["lines"]["value"]["Int"], 512);
    }
}
