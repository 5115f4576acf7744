//! Tests for single-line resolution and directional moves.

use strictly_2048::rules::resolve_line;
use strictly_2048::{Board, Cell, Direction, Line, SIZE, Shift, TileRegistry, apply_move};

fn line_of(registry: &mut TileRegistry, values: [u32; SIZE]) -> Line {
    std::array::from_fn(|col| match values[col] {
        0 => None,
        v => Some(registry.create(Cell::new(0, col), v)),
    })
}

fn resolved_values(values: [u32; SIZE]) -> ([u32; SIZE], u32) {
    let mut registry = TileRegistry::new();
    let line = line_of(&mut registry, values);
    let resolution = resolve_line(line, &mut registry);
    let out = std::array::from_fn(|i| {
        resolution.result[i]
            .and_then(|id| registry.get(id))
            .map_or(0, |t| t.value)
    });
    (out, resolution.gained)
}

#[test]
fn test_two_pairs_of_twos() {
    assert_eq!(resolved_values([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    assert_eq!(resolved_values([2, 2, 4, 0]), ([4, 4, 0, 0], 4));
}

#[test]
fn test_chain_after_compaction_stays_single_pass() {
    assert_eq!(resolved_values([2, 2, 4, 4]), ([4, 8, 0, 0], 12));
}

#[test]
fn test_gap_between_equal_tiles_merges() {
    assert_eq!(resolved_values([4, 0, 0, 4]), ([8, 0, 0, 0], 8));
}

#[test]
fn test_mixed_line() {
    assert_eq!(resolved_values([2, 4, 4, 4]), ([2, 8, 4, 0], 8));
    assert_eq!(resolved_values([0, 0, 0, 0]), ([0, 0, 0, 0], 0));
}

#[test]
fn test_repeat_after_noop_is_idempotent() {
    for direction in Direction::ALL {
        let mut board = Board::from_values([
            [2, 4, 8, 16],
            [4, 8, 16, 32],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
        ]);
        let first = apply_move(&mut board, direction);
        let second = apply_move(&mut board, direction);
        assert!(!first.moved, "{direction}");
        assert!(!second.moved, "{direction}");
    }
}

#[test]
fn test_blocked_direction_on_sparse_board() {
    let mut board = Board::from_values([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
    let before = board.values();
    for direction in [Direction::Left, Direction::Up] {
        assert!(!apply_move(&mut board, direction).moved, "{direction}");
        assert!(!apply_move(&mut board, direction).moved, "{direction}");
        assert_eq!(board.values(), before);
    }
}

#[test]
fn test_right_row_resolution() {
    let mut board = Board::from_values([[2, 2, 2, 2], [0, 2, 2, 4], [0; 4], [0; 4]]);
    let shift = apply_move(&mut board, Direction::Right);
    assert_eq!(board.values()[0], [0, 0, 4, 4]);
    assert_eq!(board.values()[1], [0, 0, 4, 4]);
    assert_eq!(shift.gained, 12);
}

/// `(removing, merge_to, cell)` of each tile consumed by `shift`, in order.
fn consumed(board: &Board, shift: &Shift) -> Vec<(bool, Option<usize>, Cell)> {
    shift
        .removed
        .iter()
        .filter_map(|id| board.tiles().get(*id))
        .map(|t| (t.removing, t.merge_to, t.cell()))
        .collect()
}

#[test]
fn test_consumed_tiles_point_at_their_target() {
    let mut board = Board::from_values([[0; 4], [0; 4], [0, 0, 8, 0], [0, 0, 8, 0]]);
    let shift = apply_move(&mut board, Direction::Up);

    assert_eq!(board.values()[0][2], 16);
    assert_eq!(consumed(&board, &shift), vec![(true, Some(0), Cell::new(0, 2))]);
}

#[test]
fn test_consumed_tiles_after_down_count_from_the_bottom() {
    let mut board = Board::from_values([[4, 2, 0, 0], [4, 2, 0, 0], [2, 2, 0, 0], [2, 0, 0, 0]]);
    let shift = apply_move(&mut board, Direction::Down);

    assert_eq!(board.values(), [[0, 0, 0, 0], [0, 0, 0, 0], [8, 2, 0, 0], [4, 4, 0, 0]]);
    assert_eq!(
        consumed(&board, &shift),
        vec![
            (true, Some(0), Cell::new(3, 0)),
            (true, Some(1), Cell::new(2, 0)),
            (true, Some(0), Cell::new(3, 1)),
        ]
    );
}

#[test]
fn test_consumed_tiles_after_left_stay_on_their_row() {
    let mut board = Board::from_values([[2, 2, 4, 4], [0; 4], [0, 8, 0, 8], [0; 4]]);
    let shift = apply_move(&mut board, Direction::Left);

    assert_eq!(board.values()[0], [4, 8, 0, 0]);
    assert_eq!(board.values()[2], [16, 0, 0, 0]);
    assert_eq!(
        consumed(&board, &shift),
        vec![
            (true, Some(0), Cell::new(0, 0)),
            (true, Some(1), Cell::new(0, 1)),
            (true, Some(0), Cell::new(2, 0)),
        ]
    );
}
