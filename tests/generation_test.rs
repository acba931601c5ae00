//! End to end checks on full generation runs.

use std::collections::HashSet;

use cavewalk::cave_generator::carver::carve_floors;
use cavewalk::cave_generator::smoother::is_enclosed_by_ground;
use cavewalk::params::CaveGeneratorParameters;
use cavewalk::{CaveGenerator, CellState, GenerationError, GenerationResult, Grid, ParamsLoadError, RecordingPlacer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run(params: CaveGeneratorParameters) -> (GenerationResult, RecordingPlacer) {
    let mut placer = RecordingPlacer::default();
    let result = CaveGenerator::new(params).generate(&mut placer).expect("generation failed");
    (result, placer)
}

fn small_cave(seed: u64) -> CaveGeneratorParameters {
    CaveGeneratorParameters {
        seed,
        map_width: 10,
        map_height: 10,
        iterations: 500,
        percentage_to_fill: 0.3,
        padding_from_wall: 2,
        max_walkers: 3,
        ..Default::default()
    }
}

#[test]
fn test_grid_matches_configured_size() {
    for (width, height) in [(10, 10), (37, 12), (2, 2), (64, 48)] {
        let params = CaveGeneratorParameters { seed: 5, map_width: width, map_height: height, padding_from_wall: 0, ..Default::default() };
        let (result, _) = run(params);
        assert_eq!((result.grid.width(), result.grid.height()), (width, height));
    }
}

#[test]
fn test_every_cell_is_ground_or_wall() {
    let (result, _) = run(CaveGeneratorParameters { seed: 12, ..Default::default() });
    assert!(result.grid.iter().all(|(_, cell)| matches!(cell, CellState::Ground | CellState::Wall)));
    assert_eq!(result.grid.count(CellState::Empty), 0);
}

#[test]
fn test_spawn_is_floor_and_never_gets_an_object() {
    for seed in 0..20 {
        let (result, placer) = run(CaveGeneratorParameters { seed, map_width: 30, map_height: 30, ..Default::default() });

        assert_eq!(result.grid.at(result.spawn), Some(CellState::Ground));
        assert!(placer.requests.iter().all(|r| r.tile != result.spawn));
        // every ground tile was in the floor set before the spawn was taken out
        assert_eq!(result.grid.count(CellState::Ground), result.floor_tile_count);
    }
}

#[test]
fn test_objects_only_land_on_floor() {
    let (result, placer) = run(CaveGeneratorParameters { seed: 31, ..Default::default() });

    let mut tiles = HashSet::new();
    for request in &placer.requests {
        assert_eq!(result.grid.at(request.tile), Some(CellState::Ground));
        assert!(tiles.insert(request.tile));
    }
    assert_eq!(result.objects_placed, placer.requests.len());
}

#[test]
fn test_no_enclosed_wall_survives_smoothing() {
    for seed in 0..10 {
        let (result, _) = run(CaveGeneratorParameters { seed, map_width: 25, map_height: 20, percentage_to_fill: 0.5, ..Default::default() });
        let grid = &result.grid;

        for x in 0..grid.width() - 1 {
            for y in 0..grid.height() - 1 {
                if grid.at((x, y)) == Some(CellState::Wall) {
                    assert!(!is_enclosed_by_ground(grid, x as isize, y as isize), "seed {seed}: ({x}, {y})");
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_cave() {
    let params = CaveGeneratorParameters { seed: 2024, ..Default::default() };

    let (first, first_objects) = run(params.clone());
    let (second, second_objects) = run(params);

    assert_eq!(first.grid, second.grid);
    assert_eq!(first.spawn, second.spawn);
    assert_eq!(first_objects, second_objects);
}

#[test]
fn test_different_seeds_different_caves() {
    let (a, _) = run(CaveGeneratorParameters { seed: 1, ..Default::default() });
    let (b, _) = run(CaveGeneratorParameters { seed: 2, ..Default::default() });
    assert_ne!(a.grid, b.grid);
}

#[test]
fn test_small_cave_scenario() {
    for seed in 0..25 {
        let params = small_cave(seed);
        let (result, _) = run(params.clone());

        // walkers are clamped to [1, width - padding] on both axes
        let (x, y) = result.spawn;
        assert!((1..=8).contains(&x), "seed {seed}: spawn {:?}", result.spawn);
        assert!((1..=8).contains(&y), "seed {seed}: spawn {:?}", result.spawn);

        let mut grid = Grid::new(10, 10);
        let report = carve_floors(&mut grid, &params, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert!(report.rounds_run == params.iterations || report.raw_tile_count as f64 / 100.0 > 0.3);
        assert!(report.peak_walkers <= 3 && report.min_walkers >= 1);
    }
}

#[test]
fn test_zero_padding_on_tiny_grid() {
    let params = CaveGeneratorParameters {
        seed: 9,
        map_width: 3,
        map_height: 3,
        padding_from_wall: 0,
        iterations: 200,
        percentage_to_fill: 1.0,
        ..Default::default()
    };
    let (result, _) = run(params);

    let (x, y) = result.spawn;
    assert!((1..=2).contains(&x) && (1..=2).contains(&y));
    assert_eq!(result.grid.at((0, 0)), Some(CellState::Wall));
}

#[test]
fn test_invalid_config_is_rejected() {
    let params = CaveGeneratorParameters { seed: 0, map_width: 10, map_height: 10, padding_from_wall: 5, ..Default::default() };
    let mut placer = RecordingPlacer::default();

    let err = CaveGenerator::new(params).generate(&mut placer).unwrap_err();

    assert!(matches!(err, GenerationError::InvalidConfiguration { field: "padding_from_wall", .. }));
    assert!(placer.requests.is_empty());
}

#[test]
fn test_params_from_json_file() {
    let path = std::env::temp_dir().join(format!("cavewalk_params_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "seed": 7, "map_width": 20, "map_height": 15, "smooth_outer_edge": true }"#).unwrap();

    let params = CaveGeneratorParameters::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!((params.seed, params.map_width, params.map_height), (7, 20, 15));
    assert!(params.smooth_outer_edge);

    let (result, _) = run(params);
    assert_eq!(result.seed, Some(7));

    let missing = CaveGeneratorParameters::from_json_file(std::env::temp_dir().join("cavewalk_no_such_file.json"));
    assert!(matches!(missing, Err(ParamsLoadError::Io(_))));
}
