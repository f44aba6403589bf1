use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::core::{spawn_random_tile, Grid};
use tui_2048::types::{Pos, CELL_COUNT};

#[test]
fn test_four_tiles_are_about_one_in_ten() {
    let mut rng = StdRng::seed_from_u64(2048);
    let draws = 20_000;
    let mut fours = 0;
    for _ in 0..draws {
        let (grid, pos) = spawn_random_tile(&Grid::new(), &mut rng);
        let value = grid.get(pos.unwrap());
        assert!(value == 2 || value == 4, "spawned {}", value);
        assert_eq!(grid.tiles().count(), 1);
        if value == 4 {
            fours += 1;
        }
    }
    let ratio = fours as f64 / draws as f64;
    assert!((0.08..0.12).contains(&ratio), "ratio = {}", ratio);
}

#[test]
fn test_spawn_only_fills_empty_cells_uniformly() {
    // Top-left corner occupied: it must never be chosen.
    let mut rows = [[0u32; 4]; 4];
    rows[0][0] = 8;
    let start = Grid::from_rows(rows).unwrap();

    let mut rng = StdRng::seed_from_u64(99);
    let mut hits = [0u32; CELL_COUNT];
    for _ in 0..15_000 {
        let (grid, pos) = spawn_random_tile(&start, &mut rng);
        let pos = pos.unwrap();
        assert_ne!(pos, Pos::new(0, 0));
        assert_eq!(grid.get(Pos::new(0, 0)), 8);
        assert_eq!(grid.count_empty(), start.count_empty() - 1);
        hits[pos.index()] += 1;
    }

    assert_eq!(hits[0], 0);
    for &h in &hits[1..] {
        // 1000 expected per cell.
        assert!((800..1200).contains(&h), "hits = {:?}", hits);
    }
}

#[test]
fn test_full_grid_is_left_alone() {
    let full = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let (grid, pos) = spawn_random_tile(&full, &mut rng);
    assert_eq!(pos, None);
    assert_eq!(grid, full);
}

#[test]
fn test_same_seed_same_spawns() {
    let mut a = StdRng::seed_from_u64(5);
    let mut b = StdRng::seed_from_u64(5);
    let mut ga = Grid::new();
    let mut gb = Grid::new();
    for _ in 0..CELL_COUNT {
        ga = spawn_random_tile(&ga, &mut a).0;
        gb = spawn_random_tile(&gb, &mut b).0;
    }
    assert_eq!(ga, gb);
    assert!(ga.is_full());
}
