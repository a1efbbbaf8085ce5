//! Command-line driver for the Connect Four rules engine.
//!
//! Replays scripted games and prints the resulting board.

mod config;
mod replay;

use clap::{Parser, Subcommand};
use config::{Config, FirstPlayer};
use connect4_core::{format_moves, parse_moves, Color};
use connect4_engine::RenderStyle;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "connect4")]
#[command(about = "Connect Four game replay tool")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value_os_t = Config::default_path())]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a game and report how it ended
    Replay {
        /// Columns played, e.g. "3 3 4 4" or "3344"
        #[arg(required = true, num_args = 1..)]
        moves: Vec<String>,
        /// Color that plays first (overrides the config file)
        #[arg(short, long, value_enum)]
        first: Option<FirstPlayer>,
        /// Do not print the board
        #[arg(short, long)]
        quiet: bool,
    },
    /// Validate a move list and print it in normalized form
    Check {
        /// Columns played
        #[arg(required = true, num_args = 1..)]
        moves: Vec<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Replay {
            moves,
            first,
            quiet,
        } => {
            let first: Color = first.unwrap_or(config.first_player).into();
            tracing::info!(%first, "replaying game");

            match replay::replay_notation(&moves.join(" "), first) {
                Ok((board, outcome)) => {
                    if config.show_board && !quiet {
                        let style = RenderStyle::from(config.symbols);
                        println!("{}\n", board.render(&style));
                    }
                    println!("{}", outcome);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::warn!(error = %e, "replay failed");
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Check { moves } => match parse_moves(&moves.join(" ")) {
            Ok(columns) => {
                println!("{}", format_moves(&columns));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
