//! Tests for command parsing and the interactive session.

use clap::Parser;
use std::path::PathBuf;
use ultimate_tictactoe::{Action, GameState, Position, actions_to_state};
use ultimate_tictactoe_cli::{
    Cli, CliConfig, Command, ParseCommandError, Reply, Session, SessionCommand,
};

fn session() -> Session {
    Session::new(GameState::new(), CliConfig::default())
}

#[test]
fn test_parse_play_forms() {
    let expected = SessionCommand::Play {
        board: Position::Center,
        square: Position::TopLeft,
    };
    assert_eq!(SessionCommand::parse("4 0"), Ok(expected.clone()));
    assert_eq!(SessionCommand::parse("play 4 0"), Ok(expected.clone()));
    assert_eq!(SessionCommand::parse("center top-left"), Ok(expected.clone()));
    assert_eq!(SessionCommand::parse("p40"), Ok(expected.clone()));
    assert_eq!(SessionCommand::parse("  40  "), Ok(expected));
}

#[test]
fn test_parse_keywords() {
    assert_eq!(SessionCommand::parse("undo"), Ok(SessionCommand::Undo));
    assert_eq!(SessionCommand::parse("REDO"), Ok(SessionCommand::Redo));
    assert_eq!(SessionCommand::parse("goto 3"), Ok(SessionCommand::Goto(3)));
    assert_eq!(SessionCommand::parse("icons"), Ok(SessionCommand::Icons));
    assert_eq!(
        SessionCommand::parse("save game.json"),
        Ok(SessionCommand::Save(PathBuf::from("game.json")))
    );
    assert_eq!(SessionCommand::parse("quit"), Ok(SessionCommand::Quit));
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(SessionCommand::parse(""), Err(ParseCommandError::Empty));
    assert_eq!(
        SessionCommand::parse("goto later"),
        Err(ParseCommandError::NotAMoveNumber("later".to_string()))
    );
    assert_eq!(
        SessionCommand::parse("p49"),
        Err(ParseCommandError::NotASquare("9".to_string()))
    );
    assert_eq!(
        SessionCommand::parse("9 0"),
        Err(ParseCommandError::NotABoard("9".to_string()))
    );
    assert_eq!(
        SessionCommand::parse("play 1 2 3"),
        Err(ParseCommandError::Unknown("play 1 2 3".to_string()))
    );
    assert_eq!(
        ParseCommandError::NotABoard("9".to_string()).to_string(),
        "Not a board: 9"
    );
}

#[test]
fn test_illegal_play_explains_itself() {
    let mut session = session();
    assert_eq!(
        session.apply(SessionCommand::parse("4 0").unwrap()),
        Reply::Render
    );
    let before = session.state().clone();

    let reply = session.apply(SessionCommand::parse("1 4").unwrap());
    assert_eq!(reply, Reply::Message("Board Top-center is not active".to_string()));
    assert_eq!(session.state(), &before);
}

#[test]
fn test_undo_redo_and_goto() {
    let mut session = session();
    session.apply(SessionCommand::parse("4 0").unwrap());
    session.apply(SessionCommand::parse("0 4").unwrap());

    assert_eq!(session.apply(SessionCommand::Undo), Reply::Render);
    assert_eq!(session.state().point_in_history(), 1);
    assert_eq!(session.apply(SessionCommand::Redo), Reply::Render);
    assert_eq!(session.state().point_in_history(), 2);
    assert!(matches!(session.apply(SessionCommand::Redo), Reply::Message(_)));

    assert_eq!(session.apply(SessionCommand::Goto(0)), Reply::Render);
    assert!(matches!(session.apply(SessionCommand::Undo), Reply::Message(_)));
    assert!(matches!(session.apply(SessionCommand::Goto(9)), Reply::Message(_)));
    assert_eq!(session.state().history().len(), 3);
}

#[test]
fn test_share_prints_link_and_query() {
    let state = actions_to_state(&[Action::play(Position::Center, Position::TopLeft)]);
    let mut session = Session::new(state, CliConfig::default());
    let Reply::Message(text) = session.apply(SessionCommand::Share) else {
        panic!("share should print a message");
    };
    assert!(text.contains("http://localhost/ultimate-tictactoe/?a[]=p40"));
    assert!(text.ends_with("a[]=p40"));
}

#[test]
fn test_moves_lists_target_board() {
    let mut session = session();
    session.apply(SessionCommand::parse("4 0").unwrap());
    assert_eq!(
        session.apply(SessionCommand::Moves),
        Reply::Message("00 01 02 03 04 05 06 07 08".to_string())
    );
}

#[tokio::test]
async fn test_save_and_load_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");
    let state = actions_to_state(&[
        Action::play(Position::Center, Position::TopLeft),
        Action::ToggleSpecialIcons,
    ]);

    ultimate_tictactoe_cli::session::save_to(&path, &state)
        .await
        .unwrap();
    let loaded = ultimate_tictactoe_cli::session::load_from(&path)
        .await
        .unwrap();
    assert_eq!(loaded, state);

    assert!(
        ultimate_tictactoe_cli::session::load_from(&dir.path().join("missing.json"))
            .await
            .is_err()
    );
}

#[test]
fn test_cli_parses_commands() {
    let cli = Cli::try_parse_from(["ultimate-tictactoe", "share", "--url", "a[]=p40"]).unwrap();
    assert_eq!(cli.config, PathBuf::from("ultimate_tictactoe.toml"));
    let Command::Share { source, base_url } = cli.command else {
        panic!("expected share");
    };
    assert_eq!(source.url.as_deref(), Some("a[]=p40"));
    assert!(base_url.is_none());

    let cli = Cli::try_parse_from([
        "ultimate-tictactoe",
        "replay",
        "--load",
        "game.json",
        "--interval-ms",
        "100",
        "--config",
        "other.toml",
    ])
    .unwrap();
    assert_eq!(cli.config, PathBuf::from("other.toml"));
    assert!(matches!(
        cli.command,
        Command::Replay {
            interval_ms: Some(100),
            ..
        }
    ));

    assert!(
        Cli::try_parse_from(["ultimate-tictactoe", "show", "--load", "a.json", "--url", "a[]=p40"])
            .is_err()
    );
}

#[tokio::test]
async fn test_game_source_defaults_to_new_game() {
    let cli = Cli::try_parse_from(["ultimate-tictactoe", "show"]).unwrap();
    let Command::Show { source, point } = cli.command else {
        panic!("expected show");
    };
    assert!(point.is_none());
    assert_eq!(source.resolve().await.unwrap(), GameState::new());
}
