use crate::cave_generator::error::GenerationError;
use crate::cave_generator::grid::{CellState, FloorTiles, Grid};

const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Turns walls whose orthogonal in-bounds neighbours are all ground into ground.
///
/// Cells are visited column by column and updated in place. Unless `include_outer_edge` is
/// set, the last row and column are left untouched. Returns the number of converted cells.
pub fn remove_single_walls(
    grid: &mut Grid,
    floor_tiles: &mut FloorTiles,
    include_outer_edge: bool,
) -> Result<usize, GenerationError> {
    let (x_end, y_end) = if include_outer_edge {
        (grid.width(), grid.height())
    } else {
        (grid.width().saturating_sub(1), grid.height().saturating_sub(1))
    };

    let mut converted = 0;
    for x in 0..x_end {
        for y in 0..y_end {
            if grid.at((x, y)) != Some(CellState::Wall) {
                continue;
            }
            if is_enclosed_by_ground(grid, x as isize, y as isize) {
                grid.set((x, y), CellState::Ground)?;
                floor_tiles.push((x, y));
                converted += 1;
            }
        }
    }

    Ok(converted)
}

/// Neighbours outside the grid do not count against the cell.
pub fn is_enclosed_by_ground(grid: &Grid, x: isize, y: isize) -> bool {
    ORTHOGONAL
        .iter()
        .filter_map(|(dx, dy)| grid.get(x + dx, y + dy))
        .all(|neighbour| neighbour == CellState::Ground)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '.' {
                    grid.set((x, y), CellState::Ground).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn test_single_wall_becomes_ground() {
        let mut grid = grid_from(&["#####", "#...#", "#.#.#", "#...#", "#####"]);
        let mut tiles = FloorTiles::default();

        let converted = remove_single_walls(&mut grid, &mut tiles, false).unwrap();

        assert_eq!(converted, 1);
        assert_eq!(grid.at((2, 2)), Some(CellState::Ground));
        assert_eq!(tiles.iter().collect::<Vec<_>>(), vec![(2, 2)]);
    }

    #[test]
    fn test_diagonals_are_ignored() {
        // (2, 2) has wall diagonals but ground on all four sides
        let mut grid = grid_from(&["#####", "##.##", "#.#.#", "##.##", "#####"]);
        let mut tiles = FloorTiles::default();
        remove_single_walls(&mut grid, &mut tiles, false).unwrap();

        assert_eq!(grid.at((2, 2)), Some(CellState::Ground));
        assert_eq!(grid.at((1, 1)), Some(CellState::Wall));
    }

    #[test]
    fn test_two_walls_side_by_side_stay() {
        let mut grid = grid_from(&["######", "#....#", "#.##.#", "#....#", "######"]);
        let mut tiles = FloorTiles::default();

        assert_eq!(remove_single_walls(&mut grid, &mut tiles, false).unwrap(), 0);
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_out_of_bounds_neighbours_do_not_block() {
        // (0, 1) sits on the left border; its in-bounds neighbours are all ground
        let mut grid = grid_from(&[".##", "#.#", ".##"]);
        let mut tiles = FloorTiles::default();
        remove_single_walls(&mut grid, &mut tiles, false).unwrap();

        assert_eq!(grid.at((0, 1)), Some(CellState::Ground));
    }

    #[test]
    fn test_degenerate_grids_are_left_alone() {
        for (width, height) in [(0, 3), (3, 0), (0, 0), (1, 1)] {
            let mut grid = Grid::new(width, height);
            let mut tiles = FloorTiles::default();
            assert_eq!(remove_single_walls(&mut grid, &mut tiles, false).unwrap(), 0);
            assert!(tiles.is_empty());
        }
    }

    #[test]
    fn test_last_row_and_column_are_skipped_by_default() {
        // (3, 1) in the last column and (1, 3) in the last row are isolated walls
        let mut grid = grid_from(&["....", "...#", "....", ".#.#"]);
        let mut edge_grid = grid.clone();

        remove_single_walls(&mut grid, &mut FloorTiles::default(), false).unwrap();
        assert_eq!(grid.at((3, 1)), Some(CellState::Wall));
        assert_eq!(grid.at((1, 3)), Some(CellState::Wall));

        remove_single_walls(&mut edge_grid, &mut FloorTiles::default(), true).unwrap();
        assert_eq!(edge_grid.at((3, 1)), Some(CellState::Ground));
        assert_eq!(edge_grid.at((1, 3)), Some(CellState::Ground));
    }
}
