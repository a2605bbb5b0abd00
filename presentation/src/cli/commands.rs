//! CLI command definitions

use clap::{Parser, ValueEnum};

/// Output format for the knob tree
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Help-style option listing with wrapped descriptions
    Options,
    /// Effective configuration as `path = value` lines
    Values,
    /// JSON rendering of the whole tree
    Json,
}

/// CLI arguments for knobset
#[derive(Parser, Debug)]
#[command(name = "knobset")]
#[command(author, version, about = "Typed configuration knobs with --option parsing")]
#[command(long_about = r#"
Knobset holds a tree of typed configuration knobs and maps command-line
tokens onto them:

  --<name> <value>   set a non-boolean knob
  --<name>           set a boolean knob to true
  --no-<name>        set a boolean knob to false

Tokens that match no knob are reported and passed through rather than
rejected. Knob tokens go after the program's own flags:

Example:
  knobset --output values --max-cycles 500000 --no-trace
  knobset --output options --width 60
"#)]
pub struct Cli {
    /// Knob override tokens, applied in order
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "values")]
    pub output: OutputFormat,

    /// Column width for wrapped option descriptions
    #[arg(long, value_name = "COLS", default_value_t = 50)]
    pub width: usize,

    /// Leave the knob tree unfinalized after applying overrides
    #[arg(long)]
    pub no_finalize: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress override anomaly summaries
    #[arg(short, long)]
    pub quiet: bool,
}
