//! Line-based terminal front end.
//!
//! The loop reads commands from any async line source and writes prompts to
//! any async sink, so the same code drives stdin/stdout and in-memory test
//! buffers.

use crate::config::PlayConfig;
use crate::session::GameSession;
use anyhow::{Context, Result};
use noughts_core::{Outcome, Player, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info, instrument, warn};

/// A line of user input during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a square.
    Play(Position),
    /// Start over with the same symbols.
    Restart,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Parses `1`-`9`, a position label, `r`/`restart` or `q`/`quit`.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            "r" | "restart" => return Ok(Command::Restart),
            _ => {}
        }

        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Position::from_index)
                .map(Command::Play)
                .ok_or_else(|| format!("Choose a square from 1 to 9, not {}", number));
        }

        Position::from_label_or_number(input)
            .map(Command::Play)
            .ok_or_else(|| format!("Unrecognised input {:?}", input))
    }
}

/// Plays games until the human quits or the input ends.
#[instrument(skip_all, fields(config = ?config))]
pub async fn run<R, W>(config: &PlayConfig, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    let human = match config.human() {
        Some(human) => *human,
        None => match choose_symbol(&mut lines, &mut output).await? {
            Some(human) => human,
            None => return Ok(()),
        },
    };

    let mut session = GameSession::new(human);
    say(
        &mut output,
        &format!(
            "You are {}, the computer is {}. You move first.\n",
            session.human(),
            session.computer()
        ),
    )
    .await?;

    loop {
        if session.is_over() {
            announce(&session, &mut output).await?;
            match prompt_after_game(&mut lines, &mut output).await? {
                Some(Command::Restart) => {
                    session.restart();
                    say(&mut output, "New game.\n").await?;
                    continue;
                }
                _ => return Ok(()),
            }
        }

        if session.is_computer_turn() {
            tokio::time::sleep(config.computer_delay()).await;
            let decision = session
                .play_computer()
                .context("Computer could not move")?;
            let mut message = format!("Computer plays {}", decision.position);
            if *config.show_rules() {
                message.push_str(&format!(" ({})", decision.rule));
            }
            message.push('\n');
            say(&mut output, &message).await?;
            continue;
        }

        say(
            &mut output,
            &format!("\n{}\n\nYour move (1-9, r to restart, q to quit): ", session.board().labelled()),
        )
        .await?;
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            info!("Input closed");
            return Ok(());
        };

        match Command::parse(&line) {
            Ok(Command::Play(position)) => {
                if let Err(e) = session.play_human(position) {
                    debug!(error = %e, "Rejected move");
                    say(&mut output, &format!("{}\n", e)).await?;
                }
            }
            Ok(Command::Restart) => {
                session.restart();
                say(&mut output, "New game.\n").await?;
            }
            Ok(Command::Quit) => return Ok(()),
            Err(message) => say(&mut output, &format!("{}\n", message)).await?,
        }
    }
}

async fn choose_symbol<R, W>(lines: &mut Lines<R>, output: &mut W) -> Result<Option<Player>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        say(output, "Play as X or O? ").await?;
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            return Ok(None);
        };
        match line.trim().parse::<Player>() {
            Ok(player) => return Ok(Some(player)),
            Err(_) => {
                warn!(input = %line.trim(), "Invalid symbol choice");
                say(output, "Please type X or O.\n").await?;
            }
        }
    }
}

async fn announce<W>(session: &GameSession, output: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut message = format!("\n{}\n\n", session.board());
    match session.outcome() {
        Outcome::Won(winner) => {
            if winner == session.human() {
                message.push_str("You win!");
            } else {
                message.push_str("The computer wins.");
            }
            if let Some(line) = session.winning_line() {
                let labels: Vec<&str> = line.iter().map(|pos| pos.label()).collect();
                message.push_str(&format!(" Winning line: {}.", labels.join(", ")));
            }
        }
        Outcome::Draw => message.push_str("It's a draw."),
        Outcome::InProgress => {}
    }
    message.push('\n');
    say(output, &message).await
}

async fn prompt_after_game<R, W>(lines: &mut Lines<R>, output: &mut W) -> Result<Option<Command>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        say(output, "Play again? (r to restart, q to quit): ").await?;
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            return Ok(None);
        };
        match Command::parse(&line) {
            Ok(command @ (Command::Restart | Command::Quit)) => return Ok(Some(command)),
            _ => say(output, "The game is over.\n").await?,
        }
    }
}

async fn say<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(text.as_bytes())
        .await
        .context("Failed to write output")?;
    output.flush().await.context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_are_one_based() {
        assert_eq!(Command::parse("1"), Ok(Command::Play(Position::TopLeft)));
        assert_eq!(Command::parse(" 9 "), Ok(Command::Play(Position::BottomRight)));
        assert!(Command::parse("0").is_err());
        assert!(Command::parse("10").is_err());
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(Command::parse("Q"), Ok(Command::Quit));
        assert_eq!(Command::parse("restart"), Ok(Command::Restart));
        assert_eq!(Command::parse("center"), Ok(Command::Play(Position::Center)));
        assert!(Command::parse("middle").is_err());
    }
}
