use std::collections::HashSet;

use crate::cave_generator::error::GenerationError;

/// A tile coordinate, `(x, y)`.
pub type Coord = (usize, usize);

/// State of a single map cell.
///
/// The discriminants are the tile ids handed to rendering collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty = 0,
    Ground = 1,
    Wall = 2,
}

impl CellState {
    pub fn tile_id(self) -> u8 {
        self as u8
    }
}

/// Fixed size map storage, indexed as `cells[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    /// Creates a `width` x `height` grid with every cell set to [`CellState::Wall`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![CellState::Wall; height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds checked read. `None` means the position is outside the grid.
    pub fn get(&self, x: isize, y: isize) -> Option<CellState> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells.get(x as usize)?.get(y as usize).copied()
    }

    pub fn at(&self, (x, y): Coord) -> Option<CellState> {
        self.cells.get(x)?.get(y).copied()
    }

    /// Bounds checked write.
    pub fn set(&mut self, (x, y): Coord, state: CellState) -> Result<(), GenerationError> {
        let (width, height) = (self.width, self.height);
        match self.cells.get_mut(x).and_then(|column| column.get_mut(y)) {
            Some(cell) => {
                *cell = state;
                Ok(())
            }
            None => Err(GenerationError::CellOutOfBounds { x, y, width, height }),
        }
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().flatten().filter(|cell| **cell == state).count()
    }

    /// Iterates the cells row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| ((x, y), self.cells[x][y])))
    }
}

/// Floor coordinates in the order they were first carved.
///
/// Duplicates are dropped on insertion, so a coordinate appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorTiles {
    tiles: Vec<Coord>,
    seen: HashSet<Coord>,
}

impl FloorTiles {
    /// Deduplicates a raw walk trace, keeping the first occurrence of every coordinate.
    pub fn from_raw(raw: impl IntoIterator<Item = Coord>) -> Self {
        let mut tiles = Self::default();
        for coord in raw {
            tiles.push(coord);
        }
        tiles
    }

    /// Appends `coord` unless it is already present.
    pub fn push(&mut self, coord: Coord) -> bool {
        if !self.seen.insert(coord) {
            return false;
        }
        self.tiles.push(coord);
        true
    }

    /// Removes every occurrence of `coord`, returning how many were removed.
    pub fn remove_all(&mut self, coord: Coord) -> usize {
        let before = self.tiles.len();
        self.tiles.retain(|tile| *tile != coord);
        self.seen.remove(&coord);
        before - self.tiles.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.seen.contains(&coord)
    }

    pub fn get(&self, index: usize) -> Option<Coord> {
        self.tiles.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.tiles.iter().copied()
    }
}
