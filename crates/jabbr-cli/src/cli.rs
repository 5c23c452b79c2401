//! Command-line arguments for `jabbr`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use jabbr_model::{
    CapacityLimits, ConfidenceThresholds, DEFAULT_MAX_ENTRIES_PER_BUCKET, DEFAULT_MAX_QUERIES,
};

#[derive(Parser)]
#[command(
    name = "jabbr",
    version,
    about = "Resolve journal abbreviations to canonical full names",
    long_about = "Resolve free-form journal abbreviations to canonical full journal names.\n\n\
                  Corpus names are expanded into abbreviation variants and bucketed by\n\
                  first letter; each query takes the entry with the lowest summed edit\n\
                  distance. Matches can be graded with a mixed similarity score."
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match every query abbreviation against a corpus of full names.
    Match(MatchArgs),

    /// Append a similarity column to a table of abbreviation/name pairs.
    Score(ScoreArgs),

    /// Collapse case-insensitive duplicate abbreviations and count them.
    Dedupe(DedupeArgs),

    /// Expand a deduplicated mapping back to one row per original query.
    Expand(ExpandArgs),

    /// Print the abbreviation variants synthesized for full names.
    Variants(VariantsArgs),

    /// Print the similarity breakdown of two strings.
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct MatchArgs {
    /// Corpus table: header row, then four columns of names (A-D, E-K, L-O, P-Z).
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Query list: header row, then one abbreviation per row.
    #[arg(value_name = "QUERIES")]
    pub queries: PathBuf,

    /// Output table (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Append a similarity column for matched rows.
    #[arg(long = "with-similarity")]
    pub with_similarity: bool,

    /// Emit corpus names as written instead of their normalized form.
    #[arg(long = "corpus-names")]
    pub corpus_names: bool,

    /// Do not draw a progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    #[command(flatten)]
    pub capacity: CapacityArgs,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Table whose first two columns are compared.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output table (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

#[derive(Args)]
pub struct DedupeArgs {
    /// Raw abbreviation list: header row, then one abbreviation per row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the distinct abbreviations.
    #[arg(long = "unique", value_name = "PATH")]
    pub unique: PathBuf,

    /// Where to write the `abbreviation,count` table of duplicates.
    #[arg(long = "counts", value_name = "PATH")]
    pub counts: PathBuf,
}

#[derive(Args)]
pub struct ExpandArgs {
    /// Mapping table: header row, then abbreviation and full name.
    #[arg(value_name = "MAPPING")]
    pub mapping: PathBuf,

    /// Counts table written by `jabbr dedupe`.
    #[arg(long = "counts", value_name = "PATH")]
    pub counts: PathBuf,

    /// Output table (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct VariantsArgs {
    /// Full journal names.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    #[arg(value_name = "LEFT")]
    pub left: String,

    #[arg(value_name = "RIGHT")]
    pub right: String,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

#[derive(Args)]
pub struct CapacityArgs {
    /// Maximum corpus names per bucket.
    #[arg(
        long = "max-bucket-entries",
        value_name = "N",
        default_value_t = DEFAULT_MAX_ENTRIES_PER_BUCKET
    )]
    pub max_bucket_entries: usize,

    /// Maximum query rows.
    #[arg(long = "max-queries", value_name = "N", default_value_t = DEFAULT_MAX_QUERIES)]
    pub max_queries: usize,

    /// Lift both limits.
    #[arg(long = "unbounded", conflicts_with_all = ["max_bucket_entries", "max_queries"])]
    pub unbounded: bool,
}

impl CapacityArgs {
    pub fn limits(&self) -> CapacityLimits {
        if self.unbounded {
            CapacityLimits::unbounded()
        } else {
            CapacityLimits {
                max_entries_per_bucket: Some(self.max_bucket_entries),
                max_queries: Some(self.max_queries),
            }
        }
    }
}

#[derive(Args)]
pub struct ThresholdArgs {
    /// Minimum similarity (percent) reported as high confidence.
    #[arg(long = "high-confidence", value_name = "PERCENT", default_value_t = 80.0)]
    pub high: f32,

    /// Minimum similarity (percent) reported as medium confidence.
    #[arg(long = "medium-confidence", value_name = "PERCENT", default_value_t = 60.0)]
    pub medium: f32,
}

impl ThresholdArgs {
    pub fn thresholds(&self) -> ConfidenceThresholds {
        ConfidenceThresholds {
            high: self.high,
            medium: self.medium,
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
