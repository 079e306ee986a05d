use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use tsm_matcher::ResolutionOrder;

/// CLI arguments for the tsm binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsm",
    version,
    about = "Suggest declared TypeScript types for untyped object literals"
)]
pub struct CliArgs {
    /// Directory of declaration files (`<source path>.json`).
    #[arg(short = 'c', long)]
    pub catalog: PathBuf,

    /// JSON file listing the object literals to match.
    #[arg(short = 's', long)]
    pub shapes: PathBuf,

    /// Matcher configuration file. Defaults to `tsm.json` in the working
    /// directory when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum number of suggestions per object literal.
    #[arg(short = 'n', long = "max-results")]
    pub max_results: Option<usize>,

    /// Drop suggestions scoring at or below this value.
    #[arg(long = "min-score")]
    pub min_score: Option<f64>,

    /// Maximum nesting depth for recursive matching.
    #[arg(long = "max-depth")]
    pub max_depth: Option<u32>,

    /// How a type name declared in several files is resolved.
    #[arg(long, value_enum, ignore_case = true)]
    pub resolution: Option<Resolution>,

    /// Score on the current thread only.
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resolution {
    /// Prefer the declaration closest to the literal.
    Nearest,
    /// First cataloged declaration wins.
    Insertion,
}

impl From<Resolution> for ResolutionOrder {
    fn from(value: Resolution) -> Self {
        match value {
            Resolution::Nearest => Self::NearestFile,
            Resolution::Insertion => Self::InsertionOrder,
        }
    }
}
