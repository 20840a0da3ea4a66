//! Command-line interface for the ultimate tic-tac-toe host.

use crate::session::load_from;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, instrument};
use ultimate_tictactoe::{GameState, state_from_url};

/// Ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ultimate-tictactoe")]
#[command(about = "Play, share and replay ultimate tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "ultimate_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Game to start from
        #[command(flatten)]
        source: GameSource,

        /// Save the game to this file when the session ends
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print a position
    Show {
        /// Game to show
        #[command(flatten)]
        source: GameSource,

        /// Show this point in history instead of the saved one
        #[arg(long)]
        point: Option<usize>,
    },

    /// Print the share link for a game
    Share {
        /// Game to share
        #[command(flatten)]
        source: GameSource,

        /// Page the link points at (overrides the config file)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Replay a game move by move
    Replay {
        /// Game to replay
        #[command(flatten)]
        source: GameSource,

        /// Delay between moves in milliseconds (overrides the config file)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

/// Where a command's game comes from. With neither flag, a new game.
#[derive(Args, Debug, Clone, Default)]
pub struct GameSource {
    /// Save game JSON file to load
    #[arg(long, conflicts_with = "url")]
    pub load: Option<PathBuf>,

    /// Share link or query string (`a[]=p40&a[]=p04`) to rebuild
    #[arg(long)]
    pub url: Option<String>,
}

impl GameSource {
    /// Builds the game this source names.
    #[instrument(skip(self), fields(load = ?self.load, url = ?self.url))]
    pub async fn resolve(&self) -> Result<GameState> {
        let state = match (&self.load, &self.url) {
            (Some(path), _) => load_from(path).await?,
            (None, Some(url)) => state_from_url(url),
            (None, None) => GameState::new(),
        };
        info!(
            entries = state.history().len(),
            point = state.point_in_history(),
            "Game resolved"
        );
        Ok(state)
    }
}
