//! Tests for the action log codec and share links.

use ultimate_tictactoe::{
    Action, GameState, Position, actions_to_query_string, actions_to_state, dispatch,
    game_actions, history_to_actions, query_string_to_actions, share_url, state_from_url,
    state_to_query_string,
};

const FULL_GAME: [(usize, usize); 27] = [
    (4, 0), (0, 4), (4, 6), (6, 0), (0, 3), (3, 0), (0, 6), (6, 2), (2, 0),
    (0, 8), (8, 0), (0, 1), (1, 0), (0, 2), (2, 5), (5, 0), (0, 5), (5, 4),
    (4, 3), (3, 4), (0, 7), (7, 0), (0, 0), (5, 8), (8, 4), (3, 8), (8, 8),
];

fn full_game_actions() -> Vec<Action> {
    FULL_GAME
        .iter()
        .filter_map(|&(board, square)| Action::play_indices(board, square))
        .collect()
}

#[test]
fn test_query_string_decodes_and_reencodes() {
    let query = "a[]=p40&a[]=p04";
    let actions = query_string_to_actions(query);
    assert_eq!(
        actions,
        vec![
            Action::play(Position::Center, Position::TopLeft),
            Action::play(Position::TopLeft, Position::Center),
        ]
    );
    assert_eq!(actions_to_query_string(&actions), query);
}

#[test]
fn test_toggle_code_round_trips() {
    let actions = query_string_to_actions("?a[]=ti&a[]=p88");
    assert_eq!(
        actions,
        vec![
            Action::ToggleSpecialIcons,
            Action::play(Position::BottomRight, Position::BottomRight),
        ]
    );
    assert_eq!(actions_to_query_string(&actions), "a[]=ti&a[]=p88");
}

#[test]
fn test_malformed_pairs_are_dropped() {
    let actions = query_string_to_actions("a[]=p40&b=p11&a[]=x&a[]=p9&&a[]&a[]=p04");
    assert_eq!(
        actions,
        vec![
            Action::play(Position::Center, Position::TopLeft),
            Action::play(Position::TopLeft, Position::Center),
        ]
    );
}

#[test]
fn test_empty_inputs() {
    assert!(query_string_to_actions("").is_empty());
    assert!(query_string_to_actions("?").is_empty());
    assert_eq!(actions_to_query_string(&[]), "");
    assert!(history_to_actions(GameState::new().history()).is_empty());
    assert_eq!(actions_to_state(&[]), GameState::new());
}

#[test]
fn test_history_to_actions_recovers_full_game() {
    let actions = full_game_actions();
    let state = actions_to_state(&actions);
    assert_eq!(history_to_actions(state.history()), actions);
}

#[test]
fn test_full_game_survives_query_string() {
    let state = actions_to_state(&full_game_actions());
    let query = state_to_query_string(&state);
    assert!(query.starts_with("a[]=p40&a[]=p04&a[]=p46"));
    assert!(query.ends_with("a[]=p88"));

    let rebuilt = actions_to_state(&query_string_to_actions(&query));
    assert_eq!(rebuilt, state);
}

#[test]
fn test_game_actions_lead_with_icon_toggle() {
    let state = actions_to_state(&[
        Action::play(Position::Center, Position::TopLeft),
        Action::ToggleSpecialIcons,
    ]);
    assert_eq!(
        game_actions(&state),
        vec![
            Action::ToggleSpecialIcons,
            Action::play(Position::Center, Position::TopLeft),
        ]
    );
    assert_eq!(state_to_query_string(&state), "a[]=ti&a[]=p40");
    assert_eq!(actions_to_state(&game_actions(&state)), state);
}

#[test]
fn test_share_includes_history_past_pointer() {
    let state = actions_to_state(&full_game_actions()[..4]);
    let rewound = dispatch(&state, &Action::time_travel(1));
    assert_eq!(
        state_to_query_string(&rewound),
        "a[]=p40&a[]=p04&a[]=p46&a[]=p60"
    );
}

#[test]
fn test_share_url_and_back() {
    let state = actions_to_state(&full_game_actions()[..3]);
    let url = share_url("https://example.com/ultimate/", &state);
    assert_eq!(url, "https://example.com/ultimate/?a[]=p40&a[]=p04&a[]=p46");
    assert_eq!(state_from_url(&url), state);
}

#[test]
fn test_state_from_url_variants() {
    assert_eq!(state_from_url("https://example.com/"), GameState::new());
    assert_eq!(
        state_from_url("a[]=p40"),
        actions_to_state(&[Action::play(Position::Center, Position::TopLeft)])
    );
    assert_eq!(
        state_from_url("https://example.com/?a%5B%5D=p40#board"),
        actions_to_state(&[Action::play(Position::Center, Position::TopLeft)])
    );
}

#[test]
fn test_illegal_logged_play_is_skipped_on_replay() {
    // The second play targets an inactive board and is ignored.
    let state = actions_to_state(&query_string_to_actions("a[]=p40&a[]=p14&a[]=p04"));
    assert_eq!(state.history().len(), 3);
    assert_eq!(
        history_to_actions(state.history()),
        vec![
            Action::play(Position::Center, Position::TopLeft),
            Action::play(Position::TopLeft, Position::Center),
        ]
    );
}
