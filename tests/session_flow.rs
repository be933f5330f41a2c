//! End-to-end session scenarios through the public API.

use tictactoe_core::{
    Difficulty, GameSession, IllegalMoveReason, Mode, MoveOutcome, Player, Square,
};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

fn pvp() -> GameSession {
    GameSession::new(Mode::HumanVsHuman, None).expect("pvp session")
}

#[test]
fn test_x_wins_top_row_and_is_scored() {
    init_tracing();
    let mut session = pvp();

    for index in [0, 4, 1, 7] {
        assert!(matches!(
            session.apply_human_move(index),
            MoveOutcome::Applied { .. }
        ));
    }

    match session.apply_human_move(2) {
        MoveOutcome::Win { player, line } => {
            assert_eq!(player, Player::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("expected win, got {other:?}"),
    }

    let scores = session.scores();
    assert_eq!(scores.wins_x(), 1);
    assert_eq!(scores.wins_o(), 0);
    assert_eq!(scores.draws(), 0);
    assert_eq!(scores.games_played(), 1);
}

#[test]
fn test_full_board_without_line_is_draw() {
    init_tracing();
    let mut session = pvp();

    // X: 0,2,3,7,8  O: 1,4,5,6 - no three in a row anywhere
    for index in [0, 1, 2, 4, 3, 5, 7, 6] {
        assert!(matches!(
            session.apply_human_move(index),
            MoveOutcome::Applied { .. }
        ));
    }
    assert_eq!(session.apply_human_move(8), MoveOutcome::Draw);

    let scores = session.scores();
    assert_eq!(scores.draws(), 1);
    assert_eq!(scores.games_played(), 1);
    assert_eq!(scores.wins_x(), 0);
    assert_eq!(scores.wins_o(), 0);
}

#[test]
fn test_mark_counts_balanced_through_legal_play() {
    init_tracing();
    let mut session = pvp();

    for index in [4, 0, 8, 2, 3] {
        session.apply_human_move(index);

        let (mut x_count, mut o_count) = (0i32, 0i32);
        for &square in session.board().squares() {
            match square {
                Square::Occupied(Player::X) => x_count += 1,
                Square::Occupied(Player::O) => o_count += 1,
                Square::Empty => {}
            }
        }
        let diff = x_count - o_count;
        assert!(diff == 0 || diff == 1, "unbalanced marks: {diff}");

        if session.is_active() {
            let expected = if diff == 0 { Player::X } else { Player::O };
            assert_eq!(session.current_turn(), expected);
        }
    }
}

#[test]
fn test_restart_preserves_scores_across_games() {
    init_tracing();
    let mut session = pvp();

    // Game 1: X wins
    for index in [0, 4, 1, 7, 2] {
        session.apply_human_move(index);
    }
    let scores_after_win = session.scores();
    assert_eq!(scores_after_win.games_played(), 1);

    session.restart();
    assert!(session.is_active());
    assert_eq!(session.current_turn(), Player::X);
    assert_eq!(session.scores(), scores_after_win);

    // Game 2: drawn
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.apply_human_move(index);
    }
    let scores = session.scores();
    assert_eq!(scores.wins_x(), 1);
    assert_eq!(scores.draws(), 1);
    assert_eq!(scores.games_played(), 2);

    // Explicit reset zeroes everything
    let zeroed = session.reset_scores();
    assert_eq!(zeroed.games_played(), 0);
    assert_eq!(zeroed.win_rate(Player::X), 0.0);
}

#[test]
fn test_illegal_inputs_never_mutate_state() {
    init_tracing();
    let mut session = pvp();
    session.apply_human_move(4);
    let board_before = session.board().clone();
    let turn_before = session.current_turn();

    for (index, expected) in [
        (4, IllegalMoveReason::CellOccupied),
        (9, IllegalMoveReason::OutOfRange),
        (42, IllegalMoveReason::OutOfRange),
    ] {
        assert_eq!(
            session.apply_human_move(index),
            MoveOutcome::IllegalMove(expected)
        );
    }

    assert_eq!(session.board(), &board_before);
    assert_eq!(session.current_turn(), turn_before);
    assert_eq!(session.scores().games_played(), 0);
}

#[test]
fn test_unrecognized_labels_create_no_session() {
    init_tracing();
    assert!(GameSession::from_labels("arcade", None).is_err());
    assert!(GameSession::from_labels("pvc", Some("impossible")).is_err());
    assert!(GameSession::from_labels("pvc", None).is_err());

    let session = GameSession::from_labels("pvc", Some("medium")).expect("valid labels");
    assert_eq!(session.difficulty(), Some(Difficulty::Medium));
    assert!(session.is_active());
}
