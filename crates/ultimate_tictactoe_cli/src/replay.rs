//! Replay scheduler: steps through a game's action log on a timer.
//!
//! Each frame is the state rebuilt from a growing prefix of the log, from the
//! empty board to the full game.

use derive_new::new;
use std::time::Duration;
use tracing::{debug, info, instrument};
use ultimate_tictactoe::{Action, GameState, actions_to_state};

/// Cursor over the prefixes of an action log.
#[derive(Debug, Clone, new)]
pub struct Replay {
    actions: Vec<Action>,
    #[new(default)]
    cursor: usize,
}

impl Replay {
    /// Number of frames not yet produced.
    pub fn frames_remaining(&self) -> usize {
        (self.actions.len() + 1).saturating_sub(self.cursor)
    }

    /// The state after the next prefix of the log, or `None` once the full
    /// log has been shown.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.actions.len()))]
    pub fn next_frame(&mut self) -> Option<GameState> {
        if self.cursor > self.actions.len() {
            return None;
        }
        let frame = actions_to_state(&self.actions[..self.cursor]);
        self.cursor += 1;
        Some(frame)
    }
}

/// Drives `replay` with a tokio interval, handing each frame to `on_frame`.
#[instrument(skip(replay, on_frame), fields(frames = replay.frames_remaining()))]
pub async fn run(mut replay: Replay, interval: Duration, mut on_frame: impl FnMut(&GameState)) -> usize {
    info!(?interval, "Starting replay");
    let mut ticker = tokio::time::interval(interval);
    let mut shown = 0;

    while replay.frames_remaining() > 0 {
        ticker.tick().await;
        let Some(frame) = replay.next_frame() else {
            break;
        };
        debug!(frame = shown, "Replay frame");
        on_frame(&frame);
        shown += 1;
    }

    info!(shown, "Replay finished");
    shown
}
