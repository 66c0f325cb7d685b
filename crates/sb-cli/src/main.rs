//! CLI frontend for the Sagebrush adventure.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sb_game::{GameConfig, GameSession};

#[derive(Parser)]
#[command(
    name = "sagebrush",
    about = "Sagebrush — a Wild West text adventure",
    version
)]
struct Cli {
    /// RNG seed for reproducible play
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON scenario file to play instead of the built-in town
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = GameConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = &cli.scenario {
        config = config.with_scenario(path);
    }

    if let Err(e) = run(&config) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &GameConfig) -> Result<(), String> {
    let mut session = GameSession::from_config(config).map_err(|e| e.to_string())?;

    println!("{}", session.greeting().bold());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        if let Some(note) = session.tick() {
            println!("\n{note}");
        }
        if session.is_over() {
            break;
        }

        print!("\nWhat would you like to do? ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.process(&line) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(e) => {
                println!("{}", e.to_string().yellow());
            }
        }

        if session.is_over() {
            break;
        }
    }

    Ok(())
}
