use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gptgauge",
    version,
    about = "Rule-based AI-generated text likelihood scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Init(InitCommand),
    Score(ScoreCommand),
    Sentences(SentencesCommand),
    Batch(BatchCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Html,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    /// Overwrite an existing gauge.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Text file to score; `-` reads stdin
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Directory holding gauge.toml and the lexicon
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Flag threshold override (percent)
    #[arg(long)]
    pub threshold: Option<f32>,
}

#[derive(Args)]
pub struct SentencesCommand {
    /// Text file to score; `-` reads stdin
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Minimum per-sentence probability to report (percent)
    #[arg(long)]
    pub threshold: Option<f32>,
}

#[derive(Args)]
pub struct BatchCommand {
    /// CSV file with a text column to score
    pub input: PathBuf,
    /// Output path; defaults to `<input>.scored.csv`
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Name of the text column
    #[arg(long)]
    pub column: Option<String>,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
