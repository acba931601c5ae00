use log::debug;
use rand::Rng;

use crate::cave_generator::error::GenerationError;
use crate::cave_generator::grid::{CellState, Coord, FloorTiles, Grid};
use crate::cave_generator::params::CaveGeneratorParameters;
use crate::cave_generator::walker::{Direction, Walker, WalkerPool};

/// Outcome of the carving stage.
#[derive(Debug, Clone)]
pub struct CarveReport {
    /// Carved coordinates, deduplicated in first-visit order.
    pub floor_tiles: FloorTiles,
    /// Length of the walk trace before deduplication.
    pub raw_tile_count: usize,
    pub rounds_run: usize,
    /// Largest pool size seen after any walker step.
    pub peak_walkers: usize,
    /// Smallest pool size seen after any walker step.
    pub min_walkers: usize,
}

/// Random walk simulation digging floor out of a solid grid.
///
/// Each call to [`CaveCarver::run_round`] steps every walker that was alive when the round
/// started. Walkers spawned during a round wait for the next one.
pub struct CaveCarver<'a> {
    grid: &'a mut Grid,
    params: &'a CaveGeneratorParameters,
    pool: WalkerPool,
    raw_tiles: Vec<Coord>,
    min_position: (isize, isize),
    max_position: (isize, isize),
    peak_walkers: usize,
    min_walkers: usize,
}

impl<'a> CaveCarver<'a> {
    /// Places the first walker in the middle of the grid, facing a random direction.
    pub fn new<R: Rng + ?Sized>(grid: &'a mut Grid, params: &'a CaveGeneratorParameters, rng: &mut R) -> Self {
        let (width, height) = (grid.width() as isize, grid.height() as isize);
        let padding = params.padding_from_wall as isize;

        // dimension - 1 keeps a zero padding inside the grid
        let max_position = ((width - padding).min(width - 1), (height - padding).min(height - 1));

        let first = Walker::new((width / 2, height / 2), Direction::random(rng));

        Self {
            grid,
            params,
            pool: WalkerPool::new(first, params.max_walkers),
            raw_tiles: Vec::new(),
            min_position: (1, 1),
            max_position,
            peak_walkers: 1,
            min_walkers: 1,
        }
    }

    pub fn pool(&self) -> &WalkerPool {
        &self.pool
    }

    pub fn raw_tile_count(&self) -> usize {
        self.raw_tiles.len()
    }

    /// Carved tiles over map area, counting revisits.
    pub fn fill_ratio(&self) -> f64 {
        self.raw_tiles.len() as f64 / (self.grid.width() * self.grid.height()) as f64
    }

    /// Runs a single round. Returns the number of walkers stepped.
    pub fn run_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, GenerationError> {
        let walkers_at_start = self.pool.len();
        let mut index = 0;

        for _ in 0..walkers_at_start {
            let removed = self.step_walker(index, rng)?;
            if !removed {
                index += 1;
            }

            self.peak_walkers = self.peak_walkers.max(self.pool.len());
            self.min_walkers = self.min_walkers.min(self.pool.len());
        }

        Ok(walkers_at_start)
    }

    /// Steps the walker at `index`. Returns true if it was removed from the pool afterwards.
    fn step_walker<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Result<bool, GenerationError> {
        let Some(walker) = self.pool.get_mut(index) else {
            return Ok(false);
        };

        if rng.gen::<f32>() < self.params.random_direction_chance {
            walker.direction = Direction::random(rng);
        }

        walker.advance(self.min_position, self.max_position);
        let position = walker.position;
        let coord = (position.0 as usize, position.1 as usize);

        self.grid.set(coord, CellState::Ground)?;
        self.raw_tiles.push(coord);

        if rng.gen::<f32>() < self.params.walker_spawn_chance && self.pool.can_spawn() {
            self.pool.spawn(Walker::new(position, Direction::random(rng)));
        }

        if rng.gen::<f32>() < self.params.walker_spawn_chance / 2.0 && self.pool.can_remove() {
            return Ok(self.pool.remove(index).is_some());
        }

        Ok(false)
    }

    pub fn finish(self, rounds_run: usize) -> CarveReport {
        let raw_tile_count = self.raw_tiles.len();
        CarveReport {
            floor_tiles: FloorTiles::from_raw(self.raw_tiles),
            raw_tile_count,
            rounds_run,
            peak_walkers: self.peak_walkers,
            min_walkers: self.min_walkers,
        }
    }
}

/// Runs the walker simulation until the fill ratio exceeds `percentage_to_fill`
/// or `iterations` rounds have passed.
pub fn carve_floors<R: Rng + ?Sized>(
    grid: &mut Grid,
    params: &CaveGeneratorParameters,
    rng: &mut R,
) -> Result<CarveReport, GenerationError> {
    let mut carver = CaveCarver::new(grid, params, rng);
    let mut rounds_run = 0;

    while rounds_run < params.iterations {
        carver.run_round(rng)?;
        rounds_run += 1;

        if carver.fill_ratio() > params.percentage_to_fill as f64 {
            break;
        }
    }

    let report = carver.finish(rounds_run);
    debug!(
        "carved {} unique tiles ({} steps) in {} rounds, walkers peaked at {}",
        report.floor_tiles.len(),
        report.raw_tile_count,
        report.rounds_run,
        report.peak_walkers
    );
    Ok(report)
}
