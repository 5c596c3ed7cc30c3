//! End-to-end game scenarios.

use noughts_engine::{Board, Cell, Engine, GameStatus, LINES, MoveError, Player, Position};

#[test]
fn test_top_row_win() {
    let mut engine = Engine::new();
    let mut statuses = Vec::new();
    for index in [0, 3, 1, 4, 2] {
        statuses.push(engine.apply_move(index));
    }

    assert!(statuses[..4].iter().all(|s| *s == GameStatus::InProgress));
    let status = statuses[4];
    assert_eq!(status.winner(), Some(Player::X));
    assert_eq!(status.line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(status, GameStatus::Won { winner: Player::X, line: LINES[0] });
}

#[test]
fn test_full_board_draw() {
    // X: 0, 1, 5, 6, 7   O: 2, 3, 4, 8
    let mut engine = Engine::new();
    let order = [0, 2, 1, 3, 5, 4, 6, 8, 7];
    for (n, index) in order.into_iter().enumerate() {
        let status = engine.apply_move(index);
        if n < 8 {
            assert_eq!(status, GameStatus::InProgress, "move {} ended the game", n + 1);
        } else {
            assert_eq!(status, GameStatus::Draw);
        }
    }

    let x = Cell::Marked(Player::X);
    let o = Cell::Marked(Player::O);
    assert_eq!(engine.board(), &Board::from_cells([x, x, o, o, o, x, x, x, o]));
}

#[test]
fn test_o_wins_column() {
    let engine = Engine::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomRight,
        Position::BottomCenter,
    ])
    .expect("legal moves");
    assert_eq!(engine.status().winner(), Some(Player::O));
    assert_eq!(engine.status().line().map(|l| l.indices()), Some([1, 4, 7]));
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_reset_after_win() {
    let mut engine = Engine::new();
    for index in [0, 3, 1, 4, 2] {
        engine.apply_move(index);
    }
    engine.reset();
    assert_eq!(engine, Engine::new());
    assert_eq!(engine.free_positions().len(), 9);
}

#[test]
fn test_error_messages() {
    let mut engine = Engine::new();
    engine.apply_move(4);
    let err = engine.try_apply_move(4).unwrap_err();
    assert_eq!(err.to_string(), "Center is already occupied");
    assert_eq!(
        MoveError::OutOfBounds(12).to_string(),
        "Cell index 12 is out of bounds (must be 0-8)"
    );
}

#[test]
fn test_status_serializes_for_front_end() {
    let mut engine = Engine::new();
    for index in [0, 3, 1, 4, 2] {
        engine.apply_move(index);
    }
    let json = serde_json::to_value(engine.status()).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "Won": { "winner": "X", "line": ["TopLeft", "TopCenter", "TopRight"] }
        })
    );

    let snapshot = serde_json::to_string(&engine).expect("serializable");
    let restored: Engine = serde_json::from_str(&snapshot).expect("deserializable");
    assert_eq!(restored, engine);
}
