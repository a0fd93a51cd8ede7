use clap::Parser;
use gptgauge::cli::{self, Commands, ReportFormat};
use gptgauge::config;
use gptgauge::error::{GaugeError, Result};
use gptgauge::lexicon::{self, Lexicon};
use gptgauge::report::{self, OutputFormat};
use gptgauge::types::config::{GaugeConfig, DEFAULT_LEXICON_DIR};
use gptgauge::{analyze, batch};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FLAGGED: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    if !path.exists() {
        return Err(GaugeError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn load_environment(root: &Path) -> Result<(GaugeConfig, Lexicon)> {
    let loaded = config::load_config(root)?;
    if loaded.is_none() {
        tracing::warn!(root = %root.display(), "no gauge.toml found, using built-in defaults");
    }
    let lexicon = Lexicon::load(root, loaded.as_ref());
    if lexicon.word_classes_empty() {
        tracing::warn!("all part-of-speech word lists are empty; word-class checks cannot fire");
    }
    Ok((loaded.unwrap_or_default(), lexicon))
}

fn output_format(format: &ReportFormat) -> OutputFormat {
    match format {
        ReportFormat::Json => OutputFormat::Json,
        ReportFormat::Md => OutputFormat::Md,
        ReportFormat::Html => OutputFormat::Html,
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("scored.csv")
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Init(cmd) => {
            let config_path = cmd.path.join(config::DEFAULT_CONFIG_FILE);
            if config_path.exists() && !cmd.force {
                return Err(GaugeError::AlreadyInitialized(
                    config_path.display().to_string(),
                ));
            }
            std::fs::create_dir_all(&cmd.path)?;
            std::fs::write(&config_path, config::DEFAULT_CONFIG_TEMPLATE)?;

            let lexicon_dir = cmd.path.join(DEFAULT_LEXICON_DIR);
            std::fs::create_dir_all(&lexicon_dir)?;
            for name in [
                lexicon::ADVERB_LIST,
                lexicon::NOUN_LIST,
                lexicon::VERB_LIST,
                lexicon::ADJECTIVE_LIST,
            ] {
                let list_path = lexicon_dir.join(name);
                if !list_path.exists() {
                    std::fs::write(&list_path, "")?;
                }
            }
            println!("initialized {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
        Commands::Score(cmd) => {
            let text = read_input(&cmd.input)?;
            let (gauge_cfg, lexicon) = load_environment(&cmd.root)?;
            let score_cfg = gauge_cfg.score_config()?;
            let threshold = cmd.threshold.unwrap_or_else(|| gauge_cfg.flag_threshold());

            let gauge_report = analyze::analyze(&text, &lexicon, &score_cfg, threshold);
            let rendered = report::render(&text, &gauge_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if gauge_report.probability >= threshold {
                Ok(exit_code::FLAGGED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        Commands::Sentences(cmd) => {
            let text = read_input(&cmd.input)?;
            let (gauge_cfg, lexicon) = load_environment(&cmd.root)?;
            let score_cfg = gauge_cfg.score_config()?;
            let threshold = cmd.threshold.unwrap_or_else(|| gauge_cfg.flag_threshold());

            let rendered = match cmd.format {
                ReportFormat::Json => {
                    let flagged =
                        analyze::score_sentences(&text, &lexicon, &score_cfg, threshold);
                    serde_json::to_string_pretty(&flagged)?
                }
                ReportFormat::Md => {
                    let flagged =
                        analyze::score_sentences(&text, &lexicon, &score_cfg, threshold);
                    report::md::sentences_to_markdown(&flagged)
                }
                ReportFormat::Html => {
                    let gauge_report = analyze::analyze(&text, &lexicon, &score_cfg, threshold);
                    report::render(&text, &gauge_report, OutputFormat::Html)?
                }
            };
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        Commands::Batch(cmd) => {
            if !cmd.input.exists() {
                return Err(GaugeError::PathNotFound(cmd.input.display().to_string()));
            }
            let (gauge_cfg, lexicon) = load_environment(&cmd.root)?;
            let score_cfg = gauge_cfg.score_config()?;
            let column = cmd
                .column
                .clone()
                .unwrap_or_else(|| gauge_cfg.batch_column().to_string());
            let output = cmd
                .output
                .clone()
                .unwrap_or_else(|| default_output_path(&cmd.input));

            let outcome = batch::score_csv(&cmd.input, &output, &column, &lexicon, &score_cfg)?;
            println!(
                "batch: {} rows, {} scored, {} skipped -> {}",
                outcome.rows,
                outcome.scored,
                outcome.skipped,
                output.display()
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
