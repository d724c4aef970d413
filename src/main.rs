//! `dynconf`: merge provider configuration files and print the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use dynconf_aggregator::aggregator::{merge, MergeOutcome};
use dynconf_aggregator::config::loader::{load_directory, load_provider_configs};
use dynconf_aggregator::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "dynconf")]
#[command(about = "Inspect how provider configurations merge", long_about = None)]
struct Cli {
    /// Default log filter when RUST_LOG is unset.
    #[arg(short, long, default_value = "dynconf_aggregator=info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge provider configurations and print the merged tree
    Merge {
        /// Provider file as NAME=PATH (repeatable)
        #[arg(short, long = "provider", value_parser = parse_provider)]
        providers: Vec<(String, PathBuf)>,

        /// Directory of TOML files, one provider per file stem
        #[arg(short, long, conflicts_with = "providers")]
        dir: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Exit with failure when the merge reported errors
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn parse_provider(value: &str) -> Result<(String, PathBuf), String> {
    value
        .split_once('=')
        .map(|(name, path)| (name.to_string(), PathBuf::from(path)))
        .ok_or_else(|| format!("expected NAME=PATH, got {:?}", value))
}

/// Whether `--strict` turns the reported merge errors into a failed run.
fn fails_strict_check(strict: bool, outcome: &MergeOutcome) -> bool {
    strict && !outcome.is_clean()
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Merge {
            providers,
            dir,
            format,
            strict,
        } => {
            let configurations = match dir {
                Some(dir) => load_directory(&dir)?,
                None => load_provider_configs(providers)?,
            };
            tracing::info!(providers = configurations.len(), "Provider configurations loaded");

            let outcome = merge(&configurations);
            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&outcome.configuration)?,
                Format::Toml => toml::to_string_pretty(&outcome.configuration)?,
            };
            println!("{}", rendered);

            if fails_strict_check(strict, &outcome) {
                eprintln!("Error: merge reported {} problem(s)", outcome.errors.len());
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
