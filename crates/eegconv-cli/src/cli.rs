//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use eegconv_model::IndexBase;

#[derive(Parser)]
#[command(
    name = "eegconv",
    version,
    about = "EEG format conversion - digitizer positions and channel types",
    long_about = "Convert EEG recording artifacts between pipeline formats.\n\n\
                  Converts Polhemus digitizer exports (.pos) to landmark files\n\
                  (.hpts) and restores channel semantic types lost during raw\n\
                  format conversion."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a Polhemus digitizer export to a landmark file.
    Positions(PositionsArgs),

    /// Run the full BDF-to-FIFF conversion pipeline.
    Pipeline(PipelineArgs),

    /// Print the default channel alias table.
    Aliases,
}

#[derive(Parser)]
pub struct PositionsArgs {
    /// Path to the digitizer export (.pos).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Landmark output path (default: INPUT with .hpts extension).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Replace the destination if it already exists.
    #[arg(long = "overwrite")]
    pub overwrite: bool,

    /// Base for the eeg/extra identifier counters.
    #[arg(long = "index-base", value_enum, default_value = "one")]
    pub index_base: IndexBaseArg,
}

#[derive(Parser)]
pub struct PipelineArgs {
    /// Path to the raw recording (.bdf).
    #[arg(value_name = "RAW")]
    pub raw_input: PathBuf,

    /// Converted recording output path (.fif).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Optional digitizer export; its landmark file is derived next to it.
    #[arg(long = "digitizer", value_name = "PATH")]
    pub digitizer: Option<PathBuf>,

    /// Replace existing outputs.
    #[arg(long = "overwrite")]
    pub overwrite: bool,
}

/// Identifier-base choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum IndexBaseArg {
    #[value(name = "zero", alias = "0")]
    Zero,
    #[value(name = "one", alias = "1")]
    One,
}

impl From<IndexBaseArg> for IndexBase {
    fn from(arg: IndexBaseArg) -> Self {
        match arg {
            IndexBaseArg::Zero => IndexBase::Zero,
            IndexBaseArg::One => IndexBase::One,
        }
    }
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
