use log::trace;
use rand::Rng;

use crate::cave_generator::grid::{Coord, FloorTiles};
use crate::cave_generator::params::CaveGeneratorParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RockVariant {
    One,
    Two,
    Three,
}

impl RockVariant {
    pub const ALL: [RockVariant; 3] = [RockVariant::One, RockVariant::Two, RockVariant::Three];
}

/// Kind of object scattered over the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Rock(RockVariant),
    Ore,
}

/// A single request to put an object on a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    pub tile: Coord,
    pub world_position: (f32, f32),
    pub kind: ObjectKind,
}

/// Whatever owns the scene. The generator only asks it to instantiate objects.
pub trait ObjectPlacer {
    type Handle;

    fn instantiate(&mut self, request: &PlacementRequest) -> Self::Handle;
}

/// Collects every request it receives, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingPlacer {
    pub requests: Vec<PlacementRequest>,
}

impl ObjectPlacer for RecordingPlacer {
    type Handle = usize;

    fn instantiate(&mut self, request: &PlacementRequest) -> usize {
        self.requests.push(*request);
        self.requests.len() - 1
    }
}

/// Walks `floor_tiles` in order and randomly drops rocks and ore on them.
///
/// Per tile: one draw decides whether an object goes there; if it does, a second draw picks
/// ore over rock and, for rocks, a third picks the variant. Returns the number of objects placed.
pub fn place_objects<R: Rng + ?Sized, P: ObjectPlacer + ?Sized>(
    floor_tiles: &FloorTiles,
    params: &CaveGeneratorParameters,
    rng: &mut R,
    placer: &mut P,
) -> usize {
    let mut placed = 0;

    for tile in floor_tiles.iter() {
        if rng.gen::<f32>() >= params.placement.object_chance {
            continue;
        }

        let kind = if rng.gen::<f32>() < params.placement.ore_chance {
            ObjectKind::Ore
        } else {
            ObjectKind::Rock(RockVariant::ALL[rng.gen_range(0..RockVariant::ALL.len())])
        };

        let request = PlacementRequest { tile, world_position: params.to_world(tile), kind };
        trace!("placing {:?} at {:?}", kind, tile);
        placer.instantiate(&request);
        placed += 1;
    }

    placed
}
