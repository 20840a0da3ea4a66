//! Interactive terminal session.
//!
//! Reads one command per line from stdin, routes game commands through
//! [`dispatch`] and prints the result. File commands are performed by the
//! async loop; everything else is handled synchronously by [`Session::apply`].

use crate::config::CliConfig;
use crate::render::render_state;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument, warn};
use ultimate_tictactoe::{
    Action, GameState, Position, check_play, dispatch, legal_moves, load_game, save_game_pretty,
    share_url, state_to_query_string,
};

const HELP: &str = "\
Commands:
  <board> <square>   play a square, e.g. `4 0` or `center top-left`
  p<board><square>   same, compact form, e.g. `p40`
  undo | redo        step back or forward through history
  goto <n>           jump to move n
  icons              toggle special icons
  moves              list legal moves
  share              print the share link
  save <file>        write the game as JSON
  load <file>        read a game from JSON
  show | help | quit";

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Play a square.
    Play {
        /// Local board.
        board: Position,
        /// Square inside the board.
        square: Position,
    },
    /// Step the history pointer back one move.
    Undo,
    /// Step the history pointer forward one move.
    Redo,
    /// Jump to a point in history.
    Goto(usize),
    /// Toggle special icons.
    Icons,
    /// List legal moves.
    Moves,
    /// Print the share link.
    Share,
    /// Save to a file.
    Save(PathBuf),
    /// Load from a file.
    Load(PathBuf),
    /// Redraw the board.
    Show,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Why a line of input is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseCommandError {
    /// The line was blank.
    #[display("Empty command")]
    Empty,

    /// `goto` was not followed by a number.
    #[display("Not a move number: {}", _0)]
    NotAMoveNumber(String),

    /// The board is not a label or a number 0-8.
    #[display("Not a board: {}", _0)]
    NotABoard(String),

    /// The square is not a label or a number 0-8.
    #[display("Not a square: {}", _0)]
    NotASquare(String),

    /// Nothing matched.
    #[display("Unknown command: {}", _0)]
    Unknown(String),
}

impl std::error::Error for ParseCommandError {}

impl SessionCommand {
    /// Parses one line of input.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&first, rest)) = words.split_first() else {
            return Err(ParseCommandError::Empty);
        };

        match (first.to_lowercase().as_str(), rest) {
            ("undo" | "back", []) => Ok(Self::Undo),
            ("redo" | "forward", []) => Ok(Self::Redo),
            ("goto", [point]) => point
                .parse()
                .map(Self::Goto)
                .map_err(|_| ParseCommandError::NotAMoveNumber(point.to_string())),
            ("icons", []) => Ok(Self::Icons),
            ("moves", []) => Ok(Self::Moves),
            ("share", []) => Ok(Self::Share),
            ("save", [path]) => Ok(Self::Save(PathBuf::from(path))),
            ("load", [path]) => Ok(Self::Load(PathBuf::from(path))),
            ("show", []) => Ok(Self::Show),
            ("help" | "?", []) => Ok(Self::Help),
            ("quit" | "exit" | "q", []) => Ok(Self::Quit),
            ("play", [board, square]) => Self::parse_play(board, square),
            (_, [square]) => Self::parse_play(first, square),
            (word, []) => Self::parse_compact(word),
            _ => Err(ParseCommandError::Unknown(line.trim().to_string())),
        }
    }

    fn parse_play(board: &str, square: &str) -> Result<Self, ParseCommandError> {
        let board = Position::from_label_or_number(board)
            .ok_or_else(|| ParseCommandError::NotABoard(board.to_string()))?;
        let square = Position::from_label_or_number(square)
            .ok_or_else(|| ParseCommandError::NotASquare(square.to_string()))?;
        Ok(Self::Play { board, square })
    }

    fn parse_compact(word: &str) -> Result<Self, ParseCommandError> {
        let digits = word.strip_prefix('p').unwrap_or(word);
        let mut chars = digits.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(board), Some(square), None) => Ok(Self::Play {
                board: Position::from_digit(board)
                    .ok_or_else(|| ParseCommandError::NotABoard(board.to_string()))?,
                square: Position::from_digit(square)
                    .ok_or_else(|| ParseCommandError::NotASquare(square.to_string()))?,
            }),
            _ => Err(ParseCommandError::Unknown(word.to_string())),
        }
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Redraw the board.
    Render,
    /// Print a message.
    Message(String),
    /// Write the game to a file.
    Save(PathBuf),
    /// Replace the game with one read from a file.
    Load(PathBuf),
    /// Leave the session.
    Quit,
}

/// A game in progress plus the host settings used to present it.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    config: CliConfig,
}

impl Session {
    /// Starts a session at `state`.
    pub fn new(state: GameState, config: CliConfig) -> Self {
        Self { state, config }
    }

    /// The current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replaces the current game.
    pub fn replace(&mut self, state: GameState) {
        self.state = state;
    }

    /// Applies a command, returning what the caller should do next.
    #[instrument(skip(self), fields(point = self.state.point_in_history()))]
    pub fn apply(&mut self, command: SessionCommand) -> Reply {
        match command {
            SessionCommand::Play { board, square } => {
                if let Err(reason) = check_play(&self.state, board, square) {
                    debug!(%reason, "Rejected play");
                    return Reply::Message(reason.to_string());
                }
                self.dispatch(Action::play(board, square))
            }
            SessionCommand::Undo => match self.state.point_in_history().checked_sub(1) {
                Some(point) => self.dispatch(Action::time_travel(point)),
                None => Reply::Message("Already at the first move".to_string()),
            },
            SessionCommand::Redo => {
                let point = self.state.point_in_history() + 1;
                if point < self.state.history().len() {
                    self.dispatch(Action::time_travel(point))
                } else {
                    Reply::Message("Already at the latest move".to_string())
                }
            }
            SessionCommand::Goto(point) => {
                if point < self.state.history().len() {
                    self.dispatch(Action::time_travel(point))
                } else {
                    Reply::Message(format!(
                        "No move {}; history ends at {}",
                        point,
                        self.state.history().len() - 1
                    ))
                }
            }
            SessionCommand::Icons => self.dispatch(Action::ToggleSpecialIcons),
            SessionCommand::Moves => {
                let moves = legal_moves(&self.state)
                    .iter()
                    .map(|mv| format!("{}{}", mv.board.to_index(), mv.square.to_index()))
                    .collect::<Vec<_>>();
                if moves.is_empty() {
                    Reply::Message("No legal moves".to_string())
                } else {
                    Reply::Message(moves.join(" "))
                }
            }
            SessionCommand::Share => Reply::Message(format!(
                "{}\n{}",
                share_url(self.config.share_base_url(), &self.state),
                state_to_query_string(&self.state)
            )),
            SessionCommand::Save(path) => Reply::Save(path),
            SessionCommand::Load(path) => Reply::Load(path),
            SessionCommand::Show => Reply::Render,
            SessionCommand::Help => Reply::Message(HELP.to_string()),
            SessionCommand::Quit => Reply::Quit,
        }
    }

    fn dispatch(&mut self, action: Action) -> Reply {
        self.state = dispatch(&self.state, &action);
        Reply::Render
    }

    /// The current screen.
    pub fn render(&self) -> String {
        render_state(&self.state, &self.config)
    }
}

/// Runs the read-eval-print loop until `quit` or end of input.
#[instrument(skip_all)]
pub async fn run_interactive(mut session: Session) -> Result<GameState> {
    info!("Starting interactive session");
    println!("{}\n", session.render());
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, "Unparsed input");
                println!("{}", err);
                continue;
            }
        };

        match session.apply(command) {
            Reply::Render => println!("{}\n", session.render()),
            Reply::Message(message) => println!("{}", message),
            Reply::Save(path) => match save_to(&path, session.state()).await {
                Ok(()) => println!("Saved to {}", path.display()),
                Err(e) => {
                    warn!(error = %e, "Save failed");
                    println!("{:#}", e);
                }
            },
            Reply::Load(path) => match load_from(&path).await {
                Ok(state) => {
                    session.replace(state);
                    println!("{}\n", session.render());
                }
                Err(e) => {
                    warn!(error = %e, "Load failed");
                    println!("{:#}", e);
                }
            },
            Reply::Quit => break,
        }
    }

    info!("Interactive session ended");
    Ok(session.state)
}

/// Writes `state` as a save game file.
#[instrument(skip(state))]
pub async fn save_to(path: &std::path::Path, state: &GameState) -> Result<()> {
    let text = save_game_pretty(state)?;
    tokio::fs::write(path, text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads and validates a save game file.
#[instrument]
pub async fn load_from(path: &std::path::Path) -> Result<GameState> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(load_game(&text)?)
}
