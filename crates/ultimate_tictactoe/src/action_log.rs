//! Action log codec: history ⇄ actions ⇄ query string.
//!
//! A game is shared as the ordered list of actions that rebuilds it from the
//! starting position. In a URL each action is one `a[]=<code>` pair:
//!
//! | Action | Code |
//! |---|---|
//! | play square `s` of board `b` | `p<b><s>` (two digits, 0-8) |
//! | toggle special icons | `ti` |
//!
//! Decoding is forgiving: unknown keys and malformed codes are dropped, so a
//! damaged link loads a shorter game instead of failing.

use super::{dispatch, Action, GameState, HistoryEntry, Position};
use tracing::{debug, instrument};

const ACTION_KEY: &str = "a[]";
const ENCODED_ACTION_KEY: &str = "a%5B%5D";
const PLAY_CODE: char = 'p';
const TOGGLE_ICONS_CODE: &str = "ti";

/// Recovers the play between each pair of adjacent history entries.
///
/// Relies on adjacent entries differing in exactly one square, which holds
/// for any history built by the engine. The first differing square (board
/// order, then square order) is taken; identical pairs produce no action.
#[instrument(skip(history), fields(entries = history.len()))]
pub fn history_to_actions(history: &[HistoryEntry]) -> Vec<Action> {
    history
        .windows(2)
        .filter_map(|pair| {
            pair[0]
                .snapshot()
                .changed_cells(pair[1].snapshot())
                .next()
                .map(|(board, square)| Action::play(board, square))
        })
        .collect()
}

/// Rebuilds a state by dispatching every action from the starting position.
///
/// This is the one replay path: loading a shared link and stepping through
/// a replay both call it, the latter with a growing prefix.
#[instrument(skip(actions), fields(actions = actions.len()))]
pub fn actions_to_state(actions: &[Action]) -> GameState {
    actions
        .iter()
        .fold(GameState::new(), |state, action| dispatch(&state, action))
}

/// Encodes actions as `a[]=...` pairs joined by `&`.
///
/// Actions without a code (time travel, unknown) are skipped; they never
/// appear in a log derived from history.
#[instrument(skip(actions), fields(actions = actions.len()))]
pub fn actions_to_query_string(actions: &[Action]) -> String {
    actions
        .iter()
        .filter_map(encode_action)
        .map(|code| format!("{}={}", ACTION_KEY, code))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_action(action: &Action) -> Option<String> {
    match action {
        Action::PlaySquare {
            board_index,
            square_index,
        } => Some(format!(
            "{}{}{}",
            PLAY_CODE,
            board_index.to_digit(),
            square_index.to_digit()
        )),
        Action::ToggleSpecialIcons => Some(TOGGLE_ICONS_CODE.to_string()),
        Action::TimeTravel { .. } | Action::Unknown => {
            debug!(%action, "Action has no query string code");
            None
        }
    }
}

/// Decodes a query string produced by [`actions_to_query_string`].
///
/// A leading `?` is ignored. Pairs whose key is not `a[]` (or its
/// percent-encoded form) and values that are not valid codes are dropped.
#[instrument]
pub fn query_string_to_actions(query: &str) -> Vec<Action> {
    let query = query.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if key != ACTION_KEY && key != ENCODED_ACTION_KEY {
                debug!(key, "Ignoring query parameter");
                return None;
            }
            let action = decode_action(value);
            if action.is_none() {
                debug!(value, "Dropping malformed action code");
            }
            action
        })
        .collect()
}

fn decode_action(code: &str) -> Option<Action> {
    if code == TOGGLE_ICONS_CODE {
        return Some(Action::ToggleSpecialIcons);
    }

    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(PLAY_CODE), Some(board), Some(square), None) => Some(Action::play(
            Position::from_digit(board)?,
            Position::from_digit(square)?,
        )),
        _ => None,
    }
}

/// The action log that reproduces `state` when shared.
///
/// The icon toggle comes first when the flag is on, followed by one play per
/// history step. The whole recorded history is included, even past the
/// pointer.
#[instrument(skip(state), fields(entries = state.history().len(), special_icons = state.special_icons()))]
pub fn game_actions(state: &GameState) -> Vec<Action> {
    let mut actions = Vec::with_capacity(state.history().len());
    if state.special_icons() {
        actions.push(Action::ToggleSpecialIcons);
    }
    actions.extend(history_to_actions(state.history()));
    actions
}

/// Query string for sharing `state`.
pub fn state_to_query_string(state: &GameState) -> String {
    actions_to_query_string(&game_actions(state))
}

/// Full share URL: `base` without its query, `?`, then the encoded actions.
#[instrument(skip(state))]
pub fn share_url(base: &str, state: &GameState) -> String {
    let base = base.split(['?', '#']).next().unwrap_or(base);
    format!("{}?{}", base, state_to_query_string(state))
}

/// Rebuilds the game encoded in a URL (or bare query string).
///
/// Everything after the first `?` and before any `#` is decoded. A URL
/// without a query yields the starting position.
#[instrument]
pub fn state_from_url(href: &str) -> GameState {
    let query = match href.split_once('?') {
        Some((_, query)) => query,
        None if href.contains('=') => href,
        None => "",
    };
    let query = query.split('#').next().unwrap_or(query);
    actions_to_state(&query_string_to_actions(query))
}
