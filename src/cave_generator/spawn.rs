use rand::Rng;

use crate::cave_generator::error::GenerationError;
use crate::cave_generator::grid::{Coord, FloorTiles};

/// Picks a uniformly random floor tile as the spawn point and removes it from `floor_tiles`.
pub fn choose_spawn_point<R: Rng + ?Sized>(floor_tiles: &mut FloorTiles, rng: &mut R) -> Result<Coord, GenerationError> {
    if floor_tiles.is_empty() {
        return Err(GenerationError::EmptyFloorSet);
    }

    let index = rng.gen_range(0..floor_tiles.len());
    let spawn = floor_tiles.get(index).ok_or(GenerationError::EmptyFloorSet)?;
    floor_tiles.remove_all(spawn);

    Ok(spawn)
}
