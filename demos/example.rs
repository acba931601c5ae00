use cavewalk::params::{CaveGeneratorParameters, PlacementParameters};
use cavewalk::{paint, CaveGenerator, CaveVisualizer, ObjectKind, ObjectPlacer, PlacementRequest, TileSink};

// Stand-ins for an engine's object layer and tile map.
#[derive(Default)]
struct SceneLayer {
    rocks: usize,
    ore: Vec<(f32, f32)>,
    requests: Vec<PlacementRequest>,
}

impl ObjectPlacer for SceneLayer {
    type Handle = ();

    fn instantiate(&mut self, request: &PlacementRequest) {
        match request.kind {
            ObjectKind::Ore => self.ore.push(request.world_position),
            ObjectKind::Rock(_) => self.rocks += 1,
        }
        self.requests.push(*request);
    }
}

#[derive(Default)]
struct TileMap {
    painted: usize,
}

impl TileSink for TileMap {
    fn set_cell_visual(&mut self, _x: usize, _y: usize, _tile_id: u8) {
        self.painted += 1;
    }
}

fn main() {
    env_logger::init();

    let params = CaveGeneratorParameters {
        seed: 15, // fixed seed
        map_width: 60, // wider map
        map_height: 30,
        percentage_to_fill: 0.45, // dig out more
        placement: PlacementParameters { object_chance: 0.1, ..Default::default() }, // fewer rocks
        ..Default::default() // the rest of the parameters keep their default value
    };

    let mut cave_generator = CaveGenerator::new(params);
    let mut scene = SceneLayer::default();
    let result = match cave_generator.generate(&mut scene) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("generation failed: {err}");
            return;
        }
    };

    let mut tile_map = TileMap::default();
    paint(&result.grid, &mut tile_map);

    println!("{}", CaveVisualizer::render_ascii(&result.grid, Some(result.spawn), &scene.requests));
    println!(
        "painted {} tiles, {} rocks, {} ore, player spawns at {:?}",
        tile_map.painted,
        scene.rocks,
        scene.ore.len(),
        result.spawn_world_position
    );
}
