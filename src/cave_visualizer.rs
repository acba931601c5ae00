use std::collections::HashMap;

use crate::cave_generator::grid::{CellState, Coord, Grid};
use crate::cave_generator::placement::{ObjectKind, PlacementRequest};

/// Receives tile updates for a finished map, e.g. an engine tile map.
pub trait TileSink {
    fn set_cell_visual(&mut self, x: usize, y: usize, tile_id: u8);
}

/// Pushes every cell of `grid` to `sink`, row by row.
///
/// Call it once the generator returned; the grid is not meant to be shown half carved.
pub fn paint<S: TileSink + ?Sized>(grid: &Grid, sink: &mut S) {
    for ((x, y), cell) in grid.iter() {
        sink.set_cell_visual(x, y, cell.tile_id());
    }
}

pub struct CaveVisualizer {}

impl CaveVisualizer {
    /// Renders the map as text, one line per row.
    ///
    /// Placed objects and the spawn point are drawn over the floor.
    pub fn render_ascii(grid: &Grid, spawn: Option<Coord>, objects: &[PlacementRequest]) -> String {
        let objects: HashMap<Coord, ObjectKind> = objects.iter().map(|r| (r.tile, r.kind)).collect();

        let mut out = String::with_capacity((grid.width() + 1) * grid.height());
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let symbol = if spawn == Some((x, y)) {
                    '@'
                } else if let Some(kind) = objects.get(&(x, y)) {
                    Self::object_symbol(*kind)
                } else {
                    grid.at((x, y)).map(Self::cell_symbol).unwrap_or(' ')
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }

    fn object_symbol(kind: ObjectKind) -> char {
        match kind {
            ObjectKind::Ore => 'o',
            ObjectKind::Rock(_) => 'r',
        }
    }

    fn cell_symbol(cell: CellState) -> char {
        match cell {
            CellState::Wall => '#',
            CellState::Ground => '.',
            CellState::Empty => ' ',
        }
    }
}
