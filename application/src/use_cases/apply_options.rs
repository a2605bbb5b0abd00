//! Apply options use case
//!
//! Orchestrates the assemble → parse → finalize lifecycle: command-line
//! tokens are applied to a knob tree, the structured report is logged, and
//! the tree is optionally frozen so nothing mutates it afterwards.

use knobset_domain::{Group, ParseReport, parse_options};
use tracing::{debug, info, warn};

/// Input for the ApplyOptions use case
#[derive(Debug, Clone)]
pub struct ApplyOptionsInput {
    /// Raw command-line tokens, in order.
    pub tokens: Vec<String>,
    /// Freeze the entire tree once the overrides are applied.
    pub finalize: bool,
}

impl ApplyOptionsInput {
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            finalize: false,
        }
    }

    /// Freeze the tree after applying, closing the assembly phase.
    pub fn with_finalize(mut self) -> Self {
        self.finalize = true;
        self
    }
}

/// Output of the ApplyOptions use case
#[derive(Debug)]
pub struct ApplyOptionsOutput {
    pub report: ParseReport,
}

/// Use case for applying command-line overrides to a knob tree
pub struct ApplyOptionsUseCase;

impl ApplyOptionsUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the use case. Parsing is total: anomalies come back in the
    /// report rather than as errors.
    pub fn execute(&self, knobs: &mut Group, input: ApplyOptionsInput) -> ApplyOptionsOutput {
        info!(
            "Applying {} option tokens to '{}'",
            input.tokens.len(),
            knobs.name()
        );

        let report = parse_options(&input.tokens, knobs);

        for applied in &report.applied {
            debug!("set {} = {}", applied.path, applied.value);
        }
        for rejected in &report.rejected {
            warn!(
                "option '{}' with value '{}' rejected: {}",
                rejected.option, rejected.value, rejected.reason
            );
        }
        if !report.unconsumed.is_empty() {
            debug!("{} token(s) not consumed", report.unconsumed.len());
        }
        if let Some(option) = &report.dangling {
            warn!("option '{}' is missing its value", option);
        }

        if input.finalize {
            knobs.finalize_tree();
            info!("knob tree '{}' finalized", knobs.name());
        }

        ApplyOptionsOutput { report }
    }
}

impl Default for ApplyOptionsUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_knobs() -> Group {
        let mut knobs = Group::new("root");
        knobs
            .add_knob("max", 100)
            .add_knob("feature-A", true)
            .add_knob("version", "1.2.3");
        knobs
    }

    #[test]
    fn test_execute_applies_overrides() {
        let mut knobs = sample_knobs();
        let input = ApplyOptionsInput::new(vec![
            "--max".to_string(),
            "200".to_string(),
            "--no-feature-A".to_string(),
        ]);

        let output = ApplyOptionsUseCase::new().execute(&mut knobs, input);

        assert!(output.report.is_clean());
        assert_eq!(knobs.knob("max").unwrap().as_int().unwrap(), 200);
        assert!(!knobs.knob("feature-A").unwrap().as_bool().unwrap());
        // No finalize requested: the tree stays open.
        assert!(knobs.is_mutable());
    }

    #[test]
    fn test_execute_with_finalize_freezes_the_tree() {
        let mut knobs = sample_knobs();
        knobs.subgroup("cache").add_knob("lines", 512);

        let input =
            ApplyOptionsInput::new(vec!["--lines".to_string(), "1024".to_string()]).with_finalize();
        let output = ApplyOptionsUseCase::new().execute(&mut knobs, input);

        assert!(output.report.is_clean());
        assert_eq!(output.report.applied[0].path, "root:cache:lines");

        // Post-finalize, every node refuses changes.
        assert!(knobs.change_value("max", "1").unwrap_err().is_frozen());
        assert!(knobs.change_value("lines", "1").unwrap_err().is_frozen());
    }

    #[test]
    fn test_execute_reports_anomalies_without_failing() {
        let mut knobs = sample_knobs();
        let input = ApplyOptionsInput::new(vec![
            "--ghost".to_string(),
            "--max".to_string(),
            "fast".to_string(),
            "--version".to_string(),
        ]);

        let output = ApplyOptionsUseCase::new().execute(&mut knobs, input);

        assert_eq!(output.report.unconsumed, vec!["--ghost"]);
        assert_eq!(output.report.rejected.len(), 1);
        assert_eq!(output.report.dangling.as_deref(), Some("--version"));
    }
}
