//! CLI argument definitions for the grimoire tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use grimoire_model::Category;

#[derive(Parser)]
#[command(
    name = "grimoire",
    version,
    about = "Extract spell components from free-text prompts",
    long_about = "Extract spell components (effect, element, level, duration, range) \
                  from free-text prompts.\n\n\
                  Also maps elements onto description templates, scores bloodline \
                  affinity and composes named spells."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory of data tables overriding the built-in ones
    /// (defaults to `GRIMOIRE_DATA_DIR` when set).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract the five spell components from a prompt.
    Extract(ExtractArgs),

    /// Compose a named spell, from a prompt or at random.
    Generate(GenerateArgs),

    /// Show which template element an element maps to.
    MapElement(MapElementArgs),

    /// Score a bloodline's affinity for an element.
    Efficiency(EfficiencyArgs),

    /// List the component vocabulary.
    Vocab(VocabArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Free-text spell request.
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Extract components from this prompt instead of picking at random.
    #[arg(long = "prompt", value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Seed for reproducible choices.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Score the spell's element against this bloodline.
    #[arg(long = "bloodline", value_name = "NAME")]
    pub bloodline: Option<String>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct MapElementArgs {
    /// Element to map.
    #[arg(value_name = "ELEMENT")]
    pub element: String,

    /// Restrict candidates to this effect's template family.
    #[arg(long = "effect", value_name = "EFFECT")]
    pub effect: Option<String>,
}

#[derive(Parser)]
pub struct EfficiencyArgs {
    #[arg(value_name = "BLOODLINE")]
    pub bloodline: String,

    #[arg(value_name = "ELEMENT")]
    pub element: String,
}

#[derive(Parser)]
pub struct VocabArgs {
    /// Only list this category (effect, element, level, duration, range).
    #[arg(value_name = "CATEGORY")]
    pub category: Option<Category>,
}

/// CLI output format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
