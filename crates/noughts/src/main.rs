//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::PlayConfig;
use noughts_core::{Board, Player, decide, evaluate, winning_line};
use serde_json::json;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            symbol,
            config,
            delay_ms,
            show_rules,
        } => run_play(symbol, config, delay_ms, show_rules).await,
        Command::Suggest {
            board,
            computer,
            json,
        } => run_suggest(board, computer, json),
        Command::Evaluate { board, json } => run_evaluate(board, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
async fn run_play(
    symbol: Option<Player>,
    config_path: Option<PathBuf>,
    delay_ms: Option<u64>,
    show_rules: bool,
) -> Result<()> {
    let mut config = PlayConfig::load(config_path.as_deref()).context("Failed to load config")?;
    if let Some(symbol) = symbol {
        config = config.with_human(symbol);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }
    if show_rules {
        config = config.with_show_rules(true);
    }

    info!(?config, "Starting interactive game");
    noughts::run(&config, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Print the computer's choice for a board
#[instrument]
fn run_suggest(board: Board, computer: Player, as_json: bool) -> Result<()> {
    let decision = decide(&board, computer, computer.opponent());

    if as_json {
        let value = match decision {
            Some(decision) => json!({
                "index": decision.position.to_index(),
                "position": decision.position,
                "rule": decision.rule,
            }),
            None => json!(null),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}\n", board);
    match decision {
        Some(decision) => println!(
            "{} plays {} (index {}) by rule: {}",
            computer,
            decision.position,
            decision.position.to_index(),
            decision.rule
        ),
        None => println!("No open square"),
    }
    Ok(())
}

/// Print the outcome of a board
#[instrument]
fn run_evaluate(board: Board, as_json: bool) -> Result<()> {
    let outcome = evaluate(&board);
    let line = winning_line(&board);

    if as_json {
        let value = json!({
            "outcome": outcome,
            "winner": outcome.winner(),
            "winning_line": line.map(|line| line.map(|pos| pos.to_index())),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}\n", board);
    println!("{}", outcome);
    if let Some(line) = line {
        let indices: Vec<String> = line.iter().map(|pos| pos.to_index().to_string()).collect();
        println!("Winning line: {}", indices.join(", "));
    }
    Ok(())
}
