//! Ultimate tic-tac-toe - terminal host
//!
//! Plays, shares and replays games using the `ultimate_tictactoe` engine.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ultimate_tictactoe::{dispatch, game_actions, share_url, Action, GameState};
use ultimate_tictactoe_cli::render::render_state;
use ultimate_tictactoe_cli::session::{run_interactive, save_to};
use ultimate_tictactoe_cli::{Cli, CliConfig, Command, GameSource, Replay, Session, replay};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for boards and links
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    match cli.command {
        Command::Play { source, save } => run_play(source, save, config).await,
        Command::Show { source, point } => run_show(source, point, config).await,
        Command::Share { source, base_url } => run_share(source, base_url, config).await,
        Command::Replay {
            source,
            interval_ms,
        } => run_replay(source, interval_ms, config).await,
    }
}

/// Run an interactive game
#[instrument(skip(config))]
async fn run_play(
    source: GameSource,
    save: Option<std::path::PathBuf>,
    config: CliConfig,
) -> Result<()> {
    let state = source.resolve().await?;
    let state = run_interactive(Session::new(state, config)).await?;

    if let Some(path) = save {
        save_to(&path, &state).await?;
        info!(path = %path.display(), "Game saved");
        println!("Saved to {}", path.display());
    }
    Ok(())
}

/// Print one position
#[instrument(skip(config))]
async fn run_show(source: GameSource, point: Option<usize>, config: CliConfig) -> Result<()> {
    let mut state = source.resolve().await?;
    if let Some(point) = point {
        anyhow::ensure!(
            point < state.history().len(),
            "No move {}; history ends at {}",
            point,
            state.history().len() - 1
        );
        state = dispatch(&state, &Action::time_travel(point));
    }
    println!("{}", render_state(&state, &config));
    Ok(())
}

/// Print the share link
#[instrument(skip(config))]
async fn run_share(source: GameSource, base_url: Option<String>, config: CliConfig) -> Result<()> {
    let config = config.with_overrides(base_url, None);
    let state = source.resolve().await?;
    println!("{}", share_url(config.share_base_url(), &state));
    Ok(())
}

/// Replay a game on a timer
#[instrument(skip(config))]
async fn run_replay(source: GameSource, interval_ms: Option<u64>, config: CliConfig) -> Result<()> {
    let config = config.with_overrides(None, interval_ms);
    let state: GameState = source.resolve().await?;
    let interval = Duration::from_millis(*config.replay_interval_ms());

    replay::run(Replay::new(game_actions(&state)), interval, |frame| {
        println!("{}\n", render_state(frame, &config));
    })
    .await;
    Ok(())
}
