use std::io::{self, BufRead, Write};

use log::warn;
use othello_core::Side;
use othello_engine::{Difficulty, OthelloAI};

use crate::session::{GameSession, SessionError, TurnOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    /// The side typed in by the user; `None` watches two AIs play.
    pub human: Option<Side>,
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            human: Some(Side::Black),
            difficulty: Difficulty::Minimax,
            seed: None,
        }
    }
}

enum Command {
    Play(String),
    Hint,
    Undo,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => None,
        "hint" | "h" => Some(Command::Hint),
        "undo" | "u" => Some(Command::Undo),
        "quit" | "q" | "exit" => Some(Command::Quit),
        other => Some(Command::Play(other.to_string())),
    }
}

/// Runs one game, reading commands from `input` and writing the board and
/// messages to `output`. Returns early if the user quits or input runs out.
pub fn run<R: BufRead, W: Write>(config: TerminalConfig, input: R, mut output: W) -> io::Result<()> {
    let mut session = GameSession::new();
    let mut ai = match config.seed {
        Some(seed) => OthelloAI::with_seed(config.difficulty, seed),
        None => OthelloAI::new(config.difficulty),
    };
    let mut lines = input.lines();

    writeln!(output, "{}", session.board())?;

    while !session.is_over() {
        let side = session.to_move();

        if Some(side) != config.human {
            match session.play_ai(&mut ai) {
                Ok(outcome) => report(&mut output, &session, &outcome)?,
                Err(err) => {
                    warn!("AI could not move: {}", err);
                    break;
                }
            }
            continue;
        }

        write!(output, "{} to move> ", side)?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };

        match parse_command(&line?) {
            None => continue,
            Some(Command::Quit) => return Ok(()),
            Some(Command::Hint) => {
                for (mv, score) in session.hints() {
                    writeln!(output, "  {} score {}", mv, score)?;
                }
            }
            Some(Command::Undo) => match session.undo_to(side) {
                Ok(()) => writeln!(output, "{}", session.board())?,
                Err(err) => writeln!(output, "{}", err)?,
            },
            Some(Command::Play(text)) => match session.play_str(&text) {
                Ok(outcome) => report(&mut output, &session, &outcome)?,
                Err(err @ (SessionError::Move(_) | SessionError::Parse(_))) => {
                    writeln!(output, "{}", err)?;
                }
                Err(err) => {
                    writeln!(output, "{}", err)?;
                    break;
                }
            },
        }
    }

    if let Some(result) = session.result() {
        let verdict = match result.winner {
            Some(side) => format!("{} wins", side),
            None => "draw".to_string(),
        };
        writeln!(output, "Game over: Black {} - White {} ({})", result.black, result.white, verdict)?;
    }

    Ok(())
}

fn report<W: Write>(output: &mut W, session: &GameSession, outcome: &TurnOutcome) -> io::Result<()> {
    writeln!(output, "{} plays {}", outcome.side, outcome.mv)?;
    writeln!(output, "{}", session.board())?;
    if let Some(side) = outcome.passed {
        writeln!(output, "{} has no legal move and passes", side)?;
    }
    Ok(())
}
