//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::{Board, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a scripted computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a fixed-heuristic computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Your symbol (X or O). Asked interactively when omitted.
        #[arg(short, long)]
        symbol: Option<Player>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Show which rule picked each computer move
        #[arg(long)]
        show_rules: bool,
    },

    /// Print the square the computer would play on a board
    Suggest {
        /// Nine cells, e.g. "XX./.O./..." (X, O, or . _ - for empty)
        #[arg(short, long)]
        board: Board,

        /// Symbol the computer plays
        #[arg(short, long)]
        computer: Player,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the outcome of a board
    Evaluate {
        /// Nine cells, e.g. "XXX/OO./..."
        #[arg(short, long)]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
