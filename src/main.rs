//! Command line entry point for the TTLive core
//!
//! Lists the team match systems, prints their fixture tables, scores a team
//! match from result tokens and computes single rating changes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use ttlive_core::config::AppConfig;
use ttlive_core::rating::LivePzCalculator;
use ttlive_core::team_match::{TeamMatchSheet, TeamMatchSystem};

/// TTLive - table tennis team match and live rating tool
#[derive(Parser)]
#[command(name = "ttlive", version, about)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        global = true,
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the known team match systems
    Systems,

    /// Print the ordered games of a team match system
    Fixtures {
        /// System name, defaults to the configured system
        system: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score a team match from one result token per game (+ or -)
    Score {
        /// System name, defaults to the configured system
        #[arg(short, long)]
        system: Option<String>,

        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Compute the rating change of side A for a single game
    Change {
        #[arg(long)]
        points_a: i32,

        #[arg(long)]
        points_b: i32,

        /// Side A won the game
        #[arg(long)]
        won: bool,

        /// Change constant override
        #[arg(short, long)]
        k: Option<i32>,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
///
/// Validation runs once all overrides are applied.
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::load(args.config.as_deref())?;

    if let Some(log_level) = &args.log_level {
        config.log.level = log_level.clone();
    }

    ttlive_core::config::validate_config(&config)?;
    Ok(config)
}

fn resolve_system(config: &AppConfig, name: Option<&str>) -> Result<&'static TeamMatchSystem> {
    match name {
        Some(name) => TeamMatchSystem::by_name(name),
        None => config.default_system(),
    }
}

fn print_fixtures(system: &TeamMatchSystem, json: bool) -> Result<()> {
    if json {
        let fixtures: Vec<_> = system.fixtures().collect();
        println!("{}", serde_json::to_string_pretty(&fixtures)?);
        return Ok(());
    }

    println!(
        "{} ({} doubles, {} singles)",
        system,
        system.count_double_opponents(),
        system.count_single_opponents()
    );
    for fixture in system.fixtures() {
        let combination = fixture.combination;
        println!(
            "{:>3}  {:<6}  {} - {}",
            fixture.number,
            combination.match_type,
            combination.opponent_index_a,
            combination.opponent_index_b
        );
    }
    Ok(())
}

fn run(command: Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Systems => {
            for system in TeamMatchSystem::ALL {
                println!("{:<20} {:>2} games", system.name(), system.count_matches());
            }
        }
        Command::Fixtures { system, json } => {
            let system = resolve_system(config, system.as_deref())?;
            print_fixtures(system, json)?;
        }
        Command::Score { system, tokens } => {
            let system = resolve_system(config, system.as_deref())?;
            let sheet: TeamMatchSheet<()> =
                TeamMatchSheet::parse_tokens(system, tokens.iter().map(String::as_str))?;
            let (a, b) = sheet.score();
            debug!("Recorded {} of {} games", sheet.results().len(), system.count_matches());
            if sheet.is_complete() {
                println!("{}:{}", a, b);
            } else {
                let open = system.count_matches() - sheet.results().len();
                println!("{}:{} ({} games open)", a, b, open);
            }
        }
        Command::Change {
            points_a,
            points_b,
            won,
            k,
        } => {
            let mut settings = config.rating.clone();
            if let Some(k) = k {
                settings.change_constant = k;
            }
            let calculator = LivePzCalculator::with_settings(settings)?;
            let change = calculator.calculate_change(points_a, points_b, won)?;
            info!("Change for {} vs {}: {}", points_a, points_b, change);
            println!("{:+}", change);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("{:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.log.level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    run(args.command, &config)
}
