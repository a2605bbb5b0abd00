//! CLI entrypoint for knobset
//!
//! Wires the layers together: builds the demo simulator knob tree,
//! applies the command-line overrides through the application layer, and
//! renders the result.

use anyhow::Result;
use clap::Parser;
use knobset_application::{ApplyOptionsInput, ApplyOptionsUseCase};
use knobset_domain::Group;
use knobset_presentation::{Cli, ConsoleFormatter, OutputFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting knobset");

    let mut knobs = simulator_knobs();

    let mut input = ApplyOptionsInput::new(cli.tokens.clone());
    if !cli.no_finalize {
        input = input.with_finalize();
    }
    let output = ApplyOptionsUseCase::new().execute(&mut knobs, input);

    if !cli.quiet {
        for token in &output.report.unconsumed {
            eprintln!("knobset: unrecognized token '{}'", token);
        }
        for rejected in &output.report.rejected {
            eprintln!(
                "knobset: '{}' rejected value '{}': {}",
                rejected.option, rejected.value, rejected.reason
            );
        }
        if let Some(option) = &output.report.dangling {
            eprintln!("knobset: '{}' is missing a value", option);
        }
    }

    let rendered = match cli.output {
        OutputFormat::Options => ConsoleFormatter::format_options(&knobs, cli.width),
        OutputFormat::Values => ConsoleFormatter::format_values(&knobs),
        OutputFormat::Json => ConsoleFormatter::format_json(&knobs),
    };
    print!("{}", rendered);

    Ok(())
}

/// The demo configuration: the kind of knob tree a hardware simulator
/// carries. Every kind and a two-level subtree are represented so each
/// token shape has something to hit.
fn simulator_knobs() -> Group {
    let mut knobs = Group::new("sim");
    knobs
        .add_knob_with("version", "1.2.3", "Configuration schema version")
        .add_knob_with(
            "max-cycles",
            100_000,
            "Stop the run after this many simulated cycles",
        )
        .add_knob_with("trace", false, "Write an instruction trace while running")
        .add_knob_with("clock-ghz", 2.5, "Simulated core clock in gigahertz");

    knobs
        .subgroup("cache")
        .add_knob_with("lines", 512, "Cache lines per way")
        .add_knob_with("ways", 8, "Set associativity")
        .add_knob_with(
            "write-back",
            true,
            "Use write-back caching instead of write-through",
        );

    knobs
        .subgroup("isa")
        .add_knob_with("extensions", "rv64gc", "Instruction-set extension string");

    knobs
}
