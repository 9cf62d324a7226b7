//! Clap argument structs for the `musestat` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// `musestat` - word counts, structure and pre-publication checks for manuscripts.
#[derive(Parser, Debug)]
#[command(name = "musestat", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file to use instead of `musestat.toml` discovery.
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Count words, sentences, chapters and frequent words.
    Analyze(AnalyzeArgs),
    /// Check a manuscript for formatting and pre-publication problems.
    Verify(VerifyArgs),
    /// Write a `.musestatignore` template.
    Init(InitArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Manuscript file (.md, .markdown, .txt).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Also analyze dialogue, pacing, readability and language.
    #[arg(long)]
    pub advanced: bool,

    /// Number of frequent words to report.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Minimum word length for the frequency list.
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Language code for stopwords (e.g. en, de, pt-BR).
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Save a `<manuscript>.stats.json` snapshot for later comparison.
    #[arg(long, short = 's')]
    pub save_snapshot: bool,

    /// Compare against a previously saved snapshot.
    #[arg(long, value_name = "SNAPSHOT")]
    pub compare: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Manuscript file to check.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Ignore file (defaults to `.musestatignore` in the working directory).
    #[arg(long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Extra ignore pattern. Repeatable.
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with an error when any ERROR-level issue is found.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Target directory (defaults to ".").
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing `.musestatignore`.
    #[arg(long)]
    pub force: bool,

    /// Print the template to stdout instead of writing a file.
    #[arg(long)]
    pub print: bool,
}
