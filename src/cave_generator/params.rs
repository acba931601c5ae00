use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cave_generator::error::{GenerationError, ParamsLoadError};

/// Contains parameters passed to [`CaveGenerator`](crate::CaveGenerator) to tweak its behaviour
///
/// These parameters control the map size, how aggressively the walkers carve, and how much
/// of the map is dug out before carving stops. For most use cases
/// `CaveGeneratorParameters::default()` should be ok, and it is recommended when setting
/// parameters to start from a default instance.
///
/// # Examples
/// Users can simply use the default parameters:
/// ```
/// # use cavewalk::{CaveGenerator, RecordingPlacer, params::*};
/// let mut generator = CaveGenerator::new(CaveGeneratorParameters::default());
/// let result = generator.generate(&mut RecordingPlacer::default()).unwrap();
/// ```
///
/// Or they can change them to their liking:
/// ```
/// # use cavewalk::{CaveGenerator, RecordingPlacer, params::*};
/// let params = CaveGeneratorParameters {
///     seed: 15, // fixed seed
///     map_width: 30, // smaller map
///     map_height: 20,
///     percentage_to_fill: 0.5, // dig out more
///     ..Default::default() // the rest of the parameters keep their default value
/// };
/// let mut generator = CaveGenerator::new(params);
/// let result = generator.generate(&mut RecordingPlacer::default()).unwrap();
/// assert_eq!(result.grid.width(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveGeneratorParameters {
    /// Seed used for map generation. The random source is seeded once with it per run.
    pub seed: u64,

    /// number of columns of the map
    pub map_width: usize,

    /// number of rows of the map
    pub map_height: usize,

    /// chance, for every walker step, that a new walker is spawned on the same tile.
    /// Half of this value is the chance that the stepping walker is removed instead.
    pub walker_spawn_chance: f32,

    /// chance, for every walker step, that the walker picks a new random direction before moving
    pub random_direction_chance: f32,

    /// upper bound on the number of walkers alive at once
    pub max_walkers: usize,

    /// carving stops once the carved tiles divided by the map area exceed this value
    pub percentage_to_fill: f32,

    /// walkers never step past `dimension - padding_from_wall` on either axis.
    /// Must be less than half the smaller map dimension.
    pub padding_from_wall: usize,

    /// maximum number of carving rounds
    pub iterations: usize,

    /// side of a tile in world units, used to turn tile coordinates into world positions
    pub cell_size: u32,

    /// if true the smoothing pass also visits the last row and column of the map
    pub smooth_outer_edge: bool,

    /// Controls how many rocks and ore are scattered. See [ PlacementParameters ]
    pub placement: PlacementParameters,
}

impl Default for CaveGeneratorParameters {
    /// The default values are the following:
    /// ```
    /// # use cavewalk::params::*;
    /// # CaveGeneratorParameters {
    /// seed: rand::random(),
    /// map_width: 50,
    /// map_height: 50,
    /// walker_spawn_chance: 0.005,
    /// random_direction_chance: 0.4,
    /// max_walkers: 10,
    /// percentage_to_fill: 0.35,
    /// padding_from_wall: 2,
    /// iterations: 10_000,
    /// cell_size: 64,
    /// smooth_outer_edge: false,
    /// placement: PlacementParameters::default(),
    /// # };
    /// ```
    fn default() -> Self {
        Self {
            seed: rand::random(),
            map_width: 50,
            map_height: 50,
            walker_spawn_chance: 0.005,
            random_direction_chance: 0.4,
            max_walkers: 10,
            percentage_to_fill: 0.35,
            padding_from_wall: 2,
            iterations: 10_000,
            cell_size: 64,
            smooth_outer_edge: false,
            placement: PlacementParameters::default(),
        }
    }
}

impl CaveGeneratorParameters {
    /// Parses parameters from JSON. Missing fields keep their default value.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsLoadError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsLoadError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks every parameter against its domain.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.map_width < 2 {
            return Err(GenerationError::invalid("map_width", format!("must be at least 2, got {}", self.map_width)));
        }
        if self.map_height < 2 {
            return Err(GenerationError::invalid("map_height", format!("must be at least 2, got {}", self.map_height)));
        }
        if self.map_width.checked_mul(self.map_height).is_none() {
            return Err(GenerationError::invalid("map_width", "map area overflows"));
        }

        check_probability("walker_spawn_chance", self.walker_spawn_chance)?;
        check_probability("random_direction_chance", self.random_direction_chance)?;
        check_probability("percentage_to_fill", self.percentage_to_fill)?;
        check_probability("placement.object_chance", self.placement.object_chance)?;
        check_probability("placement.ore_chance", self.placement.ore_chance)?;

        if self.max_walkers == 0 {
            return Err(GenerationError::invalid("max_walkers", "must be positive"));
        }
        if self.iterations == 0 {
            return Err(GenerationError::invalid("iterations", "must be positive"));
        }
        if self.cell_size == 0 {
            return Err(GenerationError::invalid("cell_size", "must be positive"));
        }

        let smaller_side = self.map_width.min(self.map_height);
        if self.padding_from_wall.saturating_mul(2) >= smaller_side {
            return Err(GenerationError::invalid(
                "padding_from_wall",
                format!("must be less than half of the smaller map side ({smaller_side}), got {}", self.padding_from_wall),
            ));
        }

        Ok(())
    }

    /// Converts a tile coordinate to the world position of its top-left corner.
    pub fn to_world(&self, (x, y): (usize, usize)) -> (f32, f32) {
        let cell = self.cell_size as f32;
        (x as f32 * cell, y as f32 * cell)
    }
}

fn check_probability(field: &'static str, value: f32) -> Result<(), GenerationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::invalid(field, format!("must be within [0, 1], got {value}")))
    }
}

/// Controls the amount of rocks and ore scattered over the floor.
///
/// Every floor tile left after the spawn point is chosen gets an object with probability
/// `object_chance`. An object is ore with probability `ore_chance`, otherwise it is one of
/// the three rock variants picked uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParameters {
    pub object_chance: f32,
    pub ore_chance: f32,
}

impl Default for PlacementParameters {
    fn default() -> Self {
        Self { object_chance: 0.2, ore_chance: 0.2 }
    }
}
