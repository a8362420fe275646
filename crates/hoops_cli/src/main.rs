//! hoops-coach CLI
//!
//! Runs coaching scripts, answers end-game questions, dumps config presets.
//! Results go to stdout as JSON; logs go to stderr (`RUST_LOG`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hoops_core::coach::EndGameAdvisor;
use hoops_core::{CoachConfig, CoachEngine, GameSituation};
use hoops_cli::{preset, run_script, scores_from_diff, GameScript};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "hoops-coach")]
#[command(about = "Basketball head-coach decision engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a game script and print one JSON line per step
    Run {
        /// Script YAML file
        script: PathBuf,

        /// Config file (YAML or JSON); overrides --preset
        #[arg(long)]
        config: Option<PathBuf>,

        /// Config preset: standard, fiba, hot_headed
        #[arg(long, default_value = "standard")]
        preset: String,

        /// Override the script's RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Recommend an end-game action for one moment
    Endgame {
        #[arg(long, default_value = "4")]
        quarter: u8,

        /// Seconds left on the game clock
        #[arg(long)]
        clock: f32,

        /// Our score minus theirs
        #[arg(
            long,
            allow_hyphen_values = true,
            value_parser = clap::value_parser!(i32).range(-65535..=65535)
        )]
        diff: i32,

        #[arg(long)]
        possession: bool,

        #[arg(long, default_value = "4")]
        fouls_to_give: u8,
    },

    /// Print a configuration preset
    Config {
        #[arg(default_value = "standard")]
        preset: String,

        #[arg(long, value_enum, default_value = "yaml")]
        format: Format,
    },
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { script, config, preset: preset_name, seed } => {
            let config = match config {
                Some(path) => CoachConfig::load(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?,
                None => preset(&preset_name)?,
            };
            let mut script = GameScript::load(&script)?;
            if let Some(seed) = seed {
                script.seed = seed;
            }

            let engine = CoachEngine::new(config)?;
            for report in run_script(engine, &script)? {
                println!("{}", serde_json::to_string(&report)?);
            }
        }

        Commands::Endgame { quarter, clock, diff, possession, fouls_to_give } => {
            // scores only matter through their difference
            let (team_score, opponent_score) = scores_from_diff(diff)?;
            let situation = GameSituation {
                quarter,
                game_clock_secs: clock,
                team_score,
                opponent_score,
                has_possession: possession,
                ..Default::default()
            };
            let decision = EndGameAdvisor::recommend(&situation, possession, fouls_to_give);
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }

        Commands::Config { preset: preset_name, format } => {
            let config = preset(&preset_name)?;
            let out = match format {
                Format::Json => serde_json::to_string_pretty(&config)?,
                Format::Yaml => serde_yaml::to_string(&config)?,
            };
            println!("{out}");
        }
    }

    Ok(())
}
