//! Interactive text console for playing a game on one terminal.

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Color, Deck, DeckError, FenError, Game, GameResolution};

pub mod command;

use command::{parse_command, Command};

/// Error type for building the starting game from command-line arguments
#[derive(Debug, Clone)]
pub enum SetupError {
    InvalidFen(FenError),
    InvalidDeck(DeckError),
    InvalidSeed { found: String },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            SetupError::InvalidDeck(e) => write!(f, "Invalid deck: {e}"),
            SetupError::InvalidSeed { found } => write!(f, "Invalid seed '{found}'"),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<FenError> for SetupError {
    fn from(e: FenError) -> Self {
        SetupError::InvalidFen(e)
    }
}

impl From<DeckError> for SetupError {
    fn from(e: DeckError) -> Self {
        SetupError::InvalidDeck(e)
    }
}

/// Build the starting game.
///
/// - no arguments: the standard position
/// - `random [seed]`: random legal decks for both sides
/// - `decks <white> <black>`: two deck strings such as `RNBQKBNR`
/// - anything else: a FEN position
pub fn setup_game(args: &[String]) -> Result<Game, SetupError> {
    match args.first().map(String::as_str) {
        None => Ok(Game::standard()),
        Some("random") => {
            let mut rng = match args.get(1) {
                Some(seed) => StdRng::seed_from_u64(seed.parse().map_err(|_| {
                    SetupError::InvalidSeed {
                        found: seed.clone(),
                    }
                })?),
                None => StdRng::from_entropy(),
            };
            let white = Deck::random(&mut rng, Color::White);
            let black = Deck::random(&mut rng, Color::Black);
            Ok(Game::from_decks(&white, &black)?)
        }
        Some("decks") => {
            let white: Deck = args.get(1).map_or("", String::as_str).parse()?;
            let black: Deck = args.get(2).map_or("", String::as_str).parse()?;
            Ok(Game::from_decks(&white, &black)?)
        }
        Some(_) => Ok(Game::from_fen(&args.join(" "))?),
    }
}

const HELP: &str = "commands: <move> (e2e4, e7e8q), moves, undo, fen, perft <depth>, help, exit";

/// Read commands from `input` until the game ends, `exit`, or end of input.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> io::Result<GameResolution> {
    writeln!(out, "{game}")?;
    writeln!(out, "{} to move", game.turn())?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Fen => writeln!(out, "{}", game.to_fen())?,
            Command::Moves => {
                let moves: Vec<String> = game
                    .legal_moves()
                    .iter()
                    .map(|mv| mv.display(game.piece_set()).to_string())
                    .collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            Command::Perft(depth) => writeln!(out, "perft {depth}: {}", game.perft(depth))?,
            Command::Undo => match game.pop() {
                Some(mv) => {
                    writeln!(out, "undid {}", mv.display(game.piece_set()))?;
                    writeln!(out, "{game}")?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            Command::Move(text) => match game.play(&text) {
                Ok(status) => {
                    writeln!(out, "{game}")?;
                    if status.is_terminal() {
                        writeln!(out, "{status}")?;
                        return Ok(status);
                    }
                    if game.is_in_check() {
                        writeln!(out, "{} is in check", game.turn())?;
                    }
                    writeln!(out, "{} to move", game.turn())?;
                }
                Err(e) => writeln!(out, "Error: {e}")?,
            },
        }
    }
    Ok(game.status())
}
