pub mod carver;
pub mod error;
pub mod grid;
pub mod params;
pub mod placement;
pub mod smoother;
pub mod spawn;
pub mod walker;
mod performance_profiler;

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use carver::carve_floors;
use error::GenerationError;
use grid::{Coord, Grid};
use params::CaveGeneratorParameters;
use performance_profiler::PerformanceProfiler;
use placement::{place_objects, ObjectPlacer};
use smoother::remove_single_walls;
use spawn::choose_spawn_point;

/// Stages a generation run moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Idle,
    Carving,
    Smoothing,
    SpawnSelection,
    Placement,
    Complete,
}

/// Output of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    /// Tile the player starts on. It is floor, and no object was placed on it.
    pub spawn: Coord,
    /// World position of the top-left corner of the spawn tile.
    pub spawn_world_position: (f32, f32),
    pub grid: Grid,
    /// Number of floor tiles right before the spawn point was taken out.
    pub floor_tile_count: usize,
    pub objects_placed: usize,
    /// Carving rounds actually run, at most `iterations`.
    pub rounds_run: usize,
    /// Seed the run was generated from. `None` when the caller supplied the random source.
    pub seed: Option<u64>,
}

pub struct CaveGenerator {
    params: CaveGeneratorParameters,
    stage: GenerationStage,
}

impl CaveGenerator {
    pub fn new(params: CaveGeneratorParameters) -> Self {
        Self { params, stage: GenerationStage::Idle }
    }

    pub fn params(&self) -> &CaveGeneratorParameters {
        &self.params
    }

    /// The stage the last run reached. A failed run stays on the stage that failed.
    pub fn stage(&self) -> GenerationStage {
        self.stage
    }

    /// Generates a cave from `params.seed`. Objects are handed to `placer` as they are placed.
    pub fn generate<P: ObjectPlacer + ?Sized>(&mut self, placer: &mut P) -> Result<GenerationResult, GenerationError> {
        info!("Cave seed: {}", self.params.seed);
        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let mut result = self.generate_with_rng(&mut rng, placer)?;
        result.seed = Some(self.params.seed);
        Ok(result)
    }

    /// Same as [`CaveGenerator::generate`], drawing from a caller provided random source.
    ///
    /// The source is used for every stage in order and never reseeded, so the same source
    /// state and parameters always give the same cave.
    pub fn generate_with_rng<R: Rng + ?Sized, P: ObjectPlacer + ?Sized>(
        &mut self,
        rng: &mut R,
        placer: &mut P,
    ) -> Result<GenerationResult, GenerationError> {
        self.stage = GenerationStage::Idle;
        self.params.validate()?;

        let params = &self.params;
        let mut profiler = PerformanceProfiler::new(Instant::now());
        let mut grid = Grid::new(params.map_width, params.map_height);

        self.stage = GenerationStage::Carving;
        debug!("stage {:?}", self.stage);
        let carve_report = carve_floors(&mut grid, params, rng)?;
        let mut floor_tiles = carve_report.floor_tiles;
        profiler.log_elapsed_time("carving time");

        self.stage = GenerationStage::Smoothing;
        debug!("stage {:?}", self.stage);
        let smoothed = remove_single_walls(&mut grid, &mut floor_tiles, params.smooth_outer_edge)?;
        debug!("smoothed away {smoothed} single walls");
        profiler.log_elapsed_time("smoothing time");

        self.stage = GenerationStage::SpawnSelection;
        debug!("stage {:?}", self.stage);
        let floor_tile_count = floor_tiles.len();
        let spawn = choose_spawn_point(&mut floor_tiles, rng)?;
        profiler.log_elapsed_time("spawn selection time");

        self.stage = GenerationStage::Placement;
        debug!("stage {:?}", self.stage);
        let objects_placed = place_objects(&floor_tiles, params, rng, placer);
        profiler.log_elapsed_time("placement time");

        self.stage = GenerationStage::Complete;
        profiler.log_total_elapsed_time("Total generation time");
        info!(
            "Cave ready: {floor_tile_count} floor tiles, {objects_placed} objects, spawn at {spawn:?}"
        );

        Ok(GenerationResult {
            spawn,
            spawn_world_position: params.to_world(spawn),
            grid,
            floor_tile_count,
            objects_placed,
            rounds_run: carve_report.rounds_run,
            seed: None,
        })
    }
}
