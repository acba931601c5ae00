//! Cave Generator
//!
//! Procedural cave maps for top-down games.
//!
//! # Features
//!
//! - Seed based generation.
//!     - The random source is seeded once per run and shared by every stage, so the same seed and parameters always give the same cave.
//! - Random walk carving.
//!     - A population of walkers starts in the middle of a solid map and digs floor as it wanders.
//!     - Walkers randomly turn, spawn new walkers and die off, up to `max_walkers` at once.
//!     - Carving stops once the dug out share of the map exceeds `percentage_to_fill`.
//! - Wall smoothing.
//!     - Single wall tiles fully surrounded by floor are removed.
//! - Spawnpoint generation
//!     - The spawn point is a random floor tile; nothing gets placed on it.
//! - Content generation
//!     - Every remaining floor tile may get a rock (three variants) or, more rarely, ore.
//!     - Objects are handed to an [`ObjectPlacer`], so the generator never touches the scene itself.
//!
//! # Examples
//!
//! ```
//! use cavewalk::params::CaveGeneratorParameters;
//! use cavewalk::{CaveGenerator, CaveVisualizer, RecordingPlacer};
//!
//! # fn main() {
//! let params = CaveGeneratorParameters {
//!     seed: 42,
//!     map_width: 40,
//!     map_height: 25,
//!     ..Default::default()
//! };
//!
//! let mut cave_generator = CaveGenerator::new(params);
//! let mut placer = RecordingPlacer::default();
//! let result = cave_generator.generate(&mut placer).unwrap();
//!
//! // Print a text preview of the cave
//! println!("{}", CaveVisualizer::render_ascii(&result.grid, Some(result.spawn), &placer.requests));
//! # }
//! ```

/// Cave Generator
pub mod cave_generator;

/// A text renderer and a tile sink hook for finished maps
pub mod cave_visualizer;

pub use cave_generator::error::{GenerationError, ParamsLoadError};
pub use cave_generator::grid::{CellState, Coord, Grid};
pub use cave_generator::params;
pub use cave_generator::placement::{ObjectKind, ObjectPlacer, PlacementRequest, RecordingPlacer, RockVariant};
pub use cave_generator::{CaveGenerator, GenerationResult, GenerationStage};
pub use cave_visualizer::{paint, CaveVisualizer, TileSink};
