use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use graspit::{Config, Profile};

#[derive(Parser)]
#[command(
    name = "graspit",
    about = "Score prose for AI-writing fingerprints and rewrite it",
    version
)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, env = "GRASPIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score text and print the breakdown
    Score {
        /// File paths to analyze (reads stdin if none provided)
        files: Vec<PathBuf>,

        #[arg(long, value_enum)]
        profile: Option<Profile>,
    },
    /// Rewrite text with the rule pipeline
    Paraphrase {
        /// File paths to rewrite (reads stdin if none provided)
        files: Vec<PathBuf>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate several rewrites, keep the lowest-scoring one
    Humanize {
        /// File paths to rewrite (reads stdin if none provided)
        files: Vec<PathBuf>,

        #[arg(long)]
        seed: Option<u64>,

        /// Number of candidates to generate
        #[arg(long)]
        candidates: Option<usize>,

        #[arg(long, value_enum)]
        profile: Option<Profile>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Score { files, profile } => {
            if let Some(profile) = profile {
                config.scorer.profile = profile;
            }
            let scorer = config.scorer();
            for text in read_inputs(&files)? {
                print_json(&scorer.score(&text))?;
            }
        }
        Command::Paraphrase { files, seed } => {
            let seed = seed.or(config.transformer.seed);
            for text in read_inputs(&files)? {
                let out = match seed {
                    Some(seed) => graspit::paraphrase_seeded(&text, seed),
                    None => graspit::paraphrase(&text),
                };
                println!("{out}");
            }
        }
        Command::Humanize {
            files,
            seed,
            candidates,
            profile,
        } => {
            if let Some(profile) = profile {
                config.scorer.profile = profile;
            }
            let scorer = config.scorer();
            let seed = seed.or(config.transformer.seed);
            let count = candidates.unwrap_or(config.selection.candidates).max(1);
            let providers = graspit::rule_based_providers(count, seed);
            for text in read_inputs(&files)? {
                let report = graspit::humanize(&text, &providers, &scorer).await?;
                print_json(&report)?;
            }
        }
    }
    Ok(())
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(vec![input]);
    }
    files
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        })
        .collect()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
