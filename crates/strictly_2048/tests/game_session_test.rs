//! Tests for the game session lifecycle.

use strictly_2048::{
    Board, Cell, Direction, Game, GameStatus, RngSource, ScriptedSource, Snapshot, TileId,
    rules::is_game_over,
};

/// Full board whose only legal move merges the bottom-right pair.
fn one_move_from_the_end() -> Board {
    Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]])
}

#[test]
fn test_fresh_game_has_exactly_two_tiles() {
    for seed in 0..50 {
        let game = Game::seeded(seed);
        assert_eq!(game.board().live_tiles().count(), 2, "seed {seed}");
        assert_eq!(game.board().grid().empty_cells().len(), 14);
        assert!(game.board().live_tiles().all(|t| t.value == 2 || t.value == 4));
        assert_eq!(game.status(), GameStatus::Playing);
    }
}

#[test]
fn test_start_game_resets_everything() {
    let mut game = Game::seeded(11);
    for direction in Direction::ALL.into_iter().cycle().take(20) {
        game.move_tiles(direction);
    }
    assert!(game.move_count() > 0);

    game.start_game();

    assert_eq!(game.score(), 0);
    assert_eq!(game.move_count(), 0);
    assert!(game.snapshot().is_none());
    assert_eq!(game.board().live_tiles().count(), 2);
    assert_eq!(game.board().tiles().last_id(), 2);
}

#[test]
fn test_noop_repeat_reports_unmoved_for_every_direction() {
    let settled = Board::from_values([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
    let mut game = Game::with_board(settled, ScriptedSource::default());

    for direction in [Direction::Left, Direction::Up] {
        assert!(!game.move_tiles(direction).moved);
        assert!(!game.move_tiles(direction).moved);
    }
    assert_eq!(game.score(), 0);
    assert_eq!(game.move_count(), 0);
    assert!(game.snapshot().is_none());
}

#[test]
fn test_value_total_grows_by_spawn_only() {
    let mut game = Game::seeded(2024);
    for direction in Direction::ALL.into_iter().cycle().take(400) {
        let before = game.board().value_total();
        let report = game.move_tiles(direction);
        let after = game.board().value_total();

        let spawned = report
            .spawned
            .and_then(|id| game.board().tiles().get(id))
            .map_or(0, |t| u64::from(t.value));
        assert_eq!(after, before + spawned);

        if report.game_over && !game.continue_from_game_over() {
            break;
        }
    }
}

#[test]
fn test_score_monotone_and_unchanged_by_noops() {
    let mut game = Game::new(RngSource::seeded(77));
    let mut last = game.score();
    for direction in Direction::ALL.into_iter().cycle().take(300) {
        let report = game.move_tiles(direction);
        if report.moved {
            assert_eq!(game.score(), last + report.gained);
        } else {
            assert_eq!(game.score(), last);
        }
        assert!(game.score() >= last);
        last = game.score();
        if game.is_over() {
            break;
        }
    }
}

#[test]
fn test_last_move_ends_game_and_continue_rewinds_it() {
    let mut game = Game::with_board(one_move_from_the_end(), ScriptedSource::new([0], [0.0]));
    assert_eq!(game.status(), GameStatus::Playing);
    let before = game.board().values();

    let report = game.move_tiles(Direction::Left);

    assert!(report.moved);
    assert_eq!(report.gained, 16);
    assert!(report.game_over);
    assert_eq!(game.board().values()[3], [4, 2, 16, 2]);
    assert!(is_game_over(game.board()));

    // Moves are refused while the game is over.
    let refused = game.move_tiles(Direction::Right);
    assert!(!refused.moved);
    assert!(refused.game_over);
    assert_eq!(game.score(), 16);

    assert!(game.continue_from_game_over());

    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.board().values(), before);
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().tiles().last_id(), 16);
    assert!(game.snapshot().is_none());
    assert!(!game.continue_from_game_over());
}

#[test]
fn test_dispose_after_rewind_keeps_restored_tile() {
    let mut game = Game::with_board(one_move_from_the_end(), ScriptedSource::new([0], [0.0]));
    let report = game.move_tiles(Direction::Left);
    assert_eq!(report.removed, vec![TileId::new(16)]);

    game.continue_from_game_over();

    assert_eq!(game.dispose(&report.removed), 0);
    assert_eq!(game.board().value_at(Cell::new(3, 3)), Some(8));
}

#[test]
fn test_dispose_drops_consumed_tiles() {
    let board = Board::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut game = Game::with_board(board, ScriptedSource::default());

    let report = game.move_tiles(Direction::Left);
    assert_eq!(game.tiles().count(), 3);
    assert!(game.tiles().any(|t| t.removing));

    assert_eq!(game.dispose(&report.removed), 1);
    assert_eq!(game.tiles().count(), 2);
    assert!(game.tiles().all(|t| !t.removing));
}

#[test]
fn test_undisposed_tiles_swept_by_next_move() {
    let board = Board::from_values([[2, 2, 0, 0], [4, 4, 0, 0], [0; 4], [0; 4]]);
    let mut game = Game::with_board(board, ScriptedSource::default());

    let first = game.move_tiles(Direction::Left);
    assert_eq!(first.removed.len(), 2);

    let noop = game.move_tiles(Direction::Left);
    assert!(!noop.moved);
    assert_eq!(game.tiles().filter(|t| t.removing).count(), 2);

    let second = game.move_tiles(Direction::Right);
    assert!(second.moved);
    let lingering: Vec<TileId> = game.tiles().filter(|t| t.removing).map(|t| t.id).collect();
    assert_eq!(lingering, second.removed);
    assert_eq!(game.dispose(&first.removed), 0);
}

#[test]
fn test_registry_stays_bounded_without_dispose() {
    let mut game = Game::seeded(55);
    for direction in Direction::ALL.into_iter().cycle().take(200) {
        game.move_tiles(direction);
        // At most eight merges fit on a 4x4 board in one move.
        let live = game.board().live_tiles().count();
        assert!(game.tiles().count() <= live + 8);
        if game.is_over() {
            break;
        }
    }
}

#[test]
fn test_flags_describe_latest_move_only() {
    let board = Board::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut game = Game::with_board(board, ScriptedSource::new([5, 5], [0.0, 0.0]));

    let first = game.move_tiles(Direction::Left);
    let merged = game.board().tile_at(Cell::new(0, 0)).cloned();
    assert!(merged.is_some_and(|t| t.merged && !t.is_new));
    let spawned = first.spawned.and_then(|id| game.board().tiles().get(id)).cloned();
    assert!(spawned.is_some_and(|t| t.is_new));

    let second = game.move_tiles(Direction::Down);
    assert!(second.moved);
    let fresh = second.spawned;
    assert!(
        game.board()
            .live_tiles()
            .filter(|t| Some(t.id) != fresh)
            .all(|t| !t.is_new && !t.merged)
    );
}

#[test]
fn test_capture_then_restore_is_observationally_identical() {
    let mut game = Game::seeded(99);
    for direction in Direction::ALL.into_iter().cycle().take(12) {
        game.move_tiles(direction);
    }

    let snapshot = Snapshot::capture(game.board(), game.score());
    let mut board = game.board().clone();
    let score = snapshot.restore(&mut board);

    assert_eq!(score, game.score());
    assert_eq!(board.tiles().last_id(), game.board().tiles().last_id());
    for cell in Cell::all() {
        let original = game.board().tile_at(cell);
        let restored = board.tile_at(cell);
        assert_eq!(
            original.map(|t| (t.id, t.row, t.col, t.value)),
            restored.map(|t| (t.id, t.row, t.col, t.value))
        );
        assert!(
            restored.is_none_or(|t| !t.is_new && !t.merged && !t.removing && t.merge_to.is_none())
        );
    }
}

#[test]
fn test_checkerboard_session_starts_over() {
    let board = Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let mut game = Game::with_board(board, ScriptedSource::default());
    assert!(game.is_over());
    assert!(game.legal_directions().is_empty());
    assert!(!game.move_tiles(Direction::Up).moved);
    // No rewind point: continue has nothing to restore.
    assert!(!game.continue_from_game_over());
}

#[test]
fn test_move_token_dispatch() {
    let board = Board::from_values([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let mut game = Game::with_board(board, ScriptedSource::new([0], [0.0]));

    assert!(!game.move_token("north").moved);
    let report = game.move_token("LEFT");
    assert_eq!(report.direction, Some(Direction::Left));
    assert!(report.moved);
    assert_eq!(game.board().value_at(Cell::new(0, 0)), Some(2));
}
