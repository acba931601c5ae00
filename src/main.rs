use std::env;
use std::error::Error;

use log::info;

use cavewalk::params::CaveGeneratorParameters;
use cavewalk::{CaveGenerator, CaveVisualizer, RecordingPlacer};

// usage: cavewalk [params.json] [seed]
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let mut params = match args.next() {
        Some(path) => {
            info!("loading parameters from {path}");
            CaveGeneratorParameters::from_json_file(path)?
        }
        None => CaveGeneratorParameters::default(),
    };
    if let Some(seed) = args.next() {
        params.seed = seed.parse()?;
    }

    let mut cave_generator = CaveGenerator::new(params);
    let mut placer = RecordingPlacer::default();
    let result = cave_generator.generate(&mut placer)?;

    print!("{}", CaveVisualizer::render_ascii(&result.grid, Some(result.spawn), &placer.requests));
    println!(
        "seed {} | {} floor tiles | {} objects | spawn {:?} at {:?}",
        cave_generator.params().seed, result.floor_tile_count, result.objects_placed, result.spawn, result.spawn_world_position
    );

    Ok(())
}
