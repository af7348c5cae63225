use std::io::{self, BufRead, Write};

use log::{info, warn};
use thiserror::Error;

use super::{DisplayError, MoveScript, TerminalDisplay};
use crate::error::EngineError;
use crate::game_logic::{GameEngine, GameStatus, Move, Rules};
use crate::game_state::{Color, Square, SquareParseError};
use crate::promotion::Promotion;
use crate::{BoardDisplay, PromotionChooser};

const HELP: &str = "Moves: e2 e4 | e2e4 | x y x y (0-7, a1 = 0 0)
Commands: moves (list legal moves) | p (print) | r (reset) | q (quit)";

/// Error that ends a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Why a typed line is not a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected a move like 'e2 e4' or '4 1 4 3'")]
    Unrecognized,
    #[error("invalid square: {0}")]
    Square(#[from] SquareParseError),
    #[error(transparent)]
    Coordinate(#[from] EngineError),
}

/// Runs the two-player game on standard input and output.
///
/// `opening` moves are played before the first prompt.
pub fn run_interactive_terminal(rules: Rules, opening: MoveScript) -> Result<GameEngine, SessionError> {
    let stdin = io::stdin();
    run_session(
        stdin.lock(),
        TerminalDisplay::new(),
        GameEngine::with_rules(rules),
        opening,
    )
}

/// Turn loop over any input and display. Returns the final game.
///
/// Ends on `q`, end of input, or checkmate.
pub fn run_session<R, W>(
    mut input: R,
    mut display: TerminalDisplay<W>,
    mut engine: GameEngine,
    mut opening: MoveScript,
) -> Result<GameEngine, SessionError>
where
    R: BufRead,
    W: Write,
{
    let replayed = opening.len();
    let complete = opening.drain(|mv| {
        let accepted = engine.try_move(mv.from, mv.to);
        if !accepted {
            warn!("opening move {mv} rejected, stopping replay");
        }
        accepted
    });
    if !complete {
        writeln!(
            display.writer_mut(),
            "Opening stopped after {} of {replayed} moves.",
            replayed - opening.len() - 1
        )?;
    }

    writeln!(display.writer_mut(), "{HELP}")?;
    display.show(&engine)?;
    if announce(&engine, display.writer_mut())? {
        return Ok(engine);
    }

    loop {
        write!(display.writer_mut(), "{}'s turn. Enter a move: ", engine.turn())?;
        display.writer_mut().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "help" => writeln!(display.writer_mut(), "{HELP}")?,
            "p" => display.show(&engine)?,
            "r" => {
                engine = GameEngine::with_rules(engine.rules());
                info!("game reset");
                writeln!(display.writer_mut(), "Board reset.")?;
                display.show(&engine)?;
            }
            "moves" => {
                let moves: Vec<String> = engine.legal_moves().iter().map(Move::to_string).collect();
                writeln!(display.writer_mut(), "{}", moves.join(" "))?;
            }
            text => match parse_move_input(text) {
                Ok(mv) => {
                    let mut chooser = PromptChooser {
                        input: &mut input,
                        output: display.writer_mut(),
                    };
                    if engine.try_move_with(mv.from, mv.to, &mut chooser) {
                        display.show(&engine)?;
                        if announce(&engine, display.writer_mut())? {
                            break;
                        }
                    } else {
                        writeln!(display.writer_mut(), "Invalid move. Try again.")?;
                    }
                }
                Err(e) => writeln!(display.writer_mut(), "{e}")?,
            },
        }
    }

    Ok(engine)
}

/// Parse a typed move: `e2 e4`, `e2e4`, or four coordinates `x y x y`.
pub fn parse_move_input(text: &str) -> Result<Move, InputError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    match parts.as_slice() {
        [joined] if joined.is_ascii() && joined.len() == 4 => {
            let (from, to) = joined.split_at(2);
            Ok(Move::new(from.parse()?, to.parse()?))
        }
        [from, to] => Ok(Move::new(from.parse()?, to.parse()?)),
        [from_x, from_y, to_x, to_y] => {
            let coordinate = |s: &str| s.parse::<u8>().map_err(|_| InputError::Unrecognized);
            let from = Square::new(coordinate(from_x)?, coordinate(from_y)?)?;
            let to = Square::new(coordinate(to_x)?, coordinate(to_y)?)?;
            Ok(Move::new(from, to))
        }
        _ => Err(InputError::Unrecognized),
    }
}

/// Print check, checkmate or a captured king for the side to move. True
/// when the game is over.
fn announce(engine: &GameEngine, out: &mut impl Write) -> io::Result<bool> {
    match engine.status() {
        Ok(GameStatus::Ongoing) => Ok(false),
        Ok(GameStatus::Check(color)) => {
            writeln!(out, "{color} is in check!")?;
            Ok(false)
        }
        Ok(GameStatus::Checkmate { winner }) => {
            info!("{winner} wins by checkmate");
            writeln!(out, "{winner} wins by checkmate!")?;
            Ok(true)
        }
        Err(EngineError::NoKingFound(color)) => {
            let winner = color.opposite();
            info!("{color} king captured, {winner} wins");
            writeln!(out, "{color}'s king was captured. {winner} wins!")?;
            Ok(true)
        }
        Err(e) => {
            warn!("cannot evaluate position: {e}");
            writeln!(out, "{e}")?;
            Ok(false)
        }
    }
}

/// Asks on the session's own input and output.
struct PromptChooser<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> PromotionChooser for PromptChooser<'_, R, W> {
    fn choose(&mut self, color: Color, square: Square) -> Promotion {
        let mut answer = String::new();
        let asked = write!(self.output, "Promote {color} pawn on {square} to (Q/R/B/N): ")
            .and_then(|()| self.output.flush())
            .and_then(|()| self.input.read_line(&mut answer));
        if let Err(e) = asked {
            warn!("promotion prompt failed, promoting to queen: {e}");
        }
        Promotion::from_input(&answer)
    }
}
