//! Tests for the spawn curve and cell selection.

use std::collections::HashMap;
use strictly_2048::rules::{SPAWN_CURVE, band_for, spawn, spawn_value};
use strictly_2048::{Board, Cell, RandomSource, RngSource};

const TRIALS: usize = 20_000;

fn observed_first_share(move_count: u32, rng: &mut RngSource<rand::rngs::StdRng>) -> f64 {
    let band = band_for(move_count);
    let hits = (0..TRIALS)
        .filter(|_| spawn_value(move_count, rng.unit()) == band.first)
        .count();
    hits as f64 / TRIALS as f64
}

#[test]
fn test_every_band_matches_its_probability() {
    let mut rng = RngSource::seeded(0x2048);
    for band in SPAWN_CURVE {
        let move_count = band.below.saturating_sub(1).min(60);
        let share = observed_first_share(move_count, &mut rng);
        assert!(
            (share - band.first_chance).abs() < 0.02,
            "move count {move_count}: observed {share}, expected {}",
            band.first_chance
        );
    }
}

#[test]
fn test_values_only_come_from_the_band() {
    let mut rng = RngSource::seeded(17);
    for move_count in [0, 6, 14, 24, 36, 50, 500] {
        let band = band_for(move_count);
        for _ in 0..500 {
            let value = spawn_value(move_count, rng.unit());
            assert!(value == band.first || value == band.second);
        }
    }
}

#[test]
fn test_late_game_never_spawns_twos() {
    let mut rng = RngSource::seeded(5);
    for move_count in 24..200 {
        let value = spawn_value(move_count, rng.unit());
        assert!(value >= 4, "move count {move_count} spawned {value}");
    }
}

#[test]
fn test_cell_choice_is_uniform_over_empty_cells() {
    let mut rng = RngSource::seeded(99);
    let mut counts: HashMap<Cell, usize> = HashMap::new();
    let rounds = 16_000;

    for _ in 0..rounds {
        let mut board = Board::new();
        if let Some(id) = spawn(&mut board, 0, &mut rng)
            && let Some(tile) = board.tiles().get(id)
        {
            *counts.entry(tile.cell()).or_default() += 1;
        }
    }

    assert_eq!(counts.len(), 16);
    let expected = rounds as f64 / 16.0;
    for (cell, count) in counts {
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(deviation < 0.15, "{cell} drew {count} times");
    }
}

#[test]
fn test_spawn_only_fills_empty_cells() {
    let mut board = Board::from_values([
        [2, 4, 8, 16],
        [4, 8, 16, 32],
        [8, 16, 32, 64],
        [16, 32, 64, 0],
    ]);
    let mut rng = RngSource::seeded(3);

    let id = spawn(&mut board, 0, &mut rng);

    assert!(id.is_some());
    assert!(board.tile_at(Cell::new(3, 3)).is_some());
    assert!(board.grid().is_full());
    assert_eq!(spawn(&mut board, 0, &mut rng), None);
}
