//! Boundary-condition strategies for the outermost ring of cells.
//!
//! All three share the interior computation; they differ only in how a
//! neighbor index that falls outside the grid is resolved.

use crate::grid::Grid;
use crate::rule::next_value;

/// Offsets of the 8-cell Moore neighborhood.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// How cells on the grid edge resolve neighbors outside the grid.
///
/// Chosen once at kernel construction, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Outside cells are permanently dead and drop out of the sum.
    Constant,
    /// The grid wraps around: row `-1` is row `rows - 1`, row `rows` is 0,
    /// same for columns. Every edge cell still sums exactly 8 neighbors.
    #[default]
    Periodic,
    /// The grid reflects at its edge: an index one step past the edge
    /// resolves to the edge cell itself, so edge cells double-count their
    /// edge-adjacent values (and corners count themselves).
    Mirror,
}

impl Boundary {
    /// Update every boundary cell of `next` from `current`.
    ///
    /// The variant is resolved to one of the three sum functions here, once
    /// per step, not per cell. Runs after the interior update and writes only
    /// the outermost ring.
    pub(crate) fn apply(self, current: &Grid, next: &mut Grid) {
        let sum: fn(&Grid, usize, usize) -> u8 = match self {
            Boundary::Constant => sum_constant,
            Boundary::Periodic => sum_periodic,
            Boundary::Mirror => sum_mirror,
        };
        apply_ring(current, next, sum);
    }
}

/// Walk the boundary ring: left and right columns corners included, then top
/// and bottom rows without the corners. `2 * (rows + cols) - 4` cells total,
/// each written exactly once.
fn apply_ring(current: &Grid, next: &mut Grid, sum: fn(&Grid, usize, usize) -> u8) {
    let rows = current.rows();
    let cols = current.cols();
    for i in 0..rows {
        for j in [0, cols - 1] {
            next.set(i, j, next_value(current.get(i, j), sum(current, i, j)));
        }
    }
    for j in 1..cols - 1 {
        for i in [0, rows - 1] {
            next.set(i, j, next_value(current.get(i, j), sum(current, i, j)));
        }
    }
}

fn sum_constant(grid: &Grid, row: usize, col: usize) -> u8 {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;
    let mut sum = 0;
    for (di, dj) in NEIGHBORS {
        let i = row as isize + di;
        let j = col as isize + dj;
        if i >= 0 && i < rows && j >= 0 && j < cols {
            sum += grid.get(i as usize, j as usize);
        }
    }
    sum
}

fn sum_periodic(grid: &Grid, row: usize, col: usize) -> u8 {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;
    NEIGHBORS
        .iter()
        .map(|&(di, dj)| {
            let i = (row as isize + di).rem_euclid(rows) as usize;
            let j = (col as isize + dj).rem_euclid(cols) as usize;
            grid.get(i, j)
        })
        .sum()
}

fn sum_mirror(grid: &Grid, row: usize, col: usize) -> u8 {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;
    NEIGHBORS
        .iter()
        .map(|&(di, dj)| {
            let i = (row as isize + di).clamp(0, rows - 1) as usize;
            let j = (col as isize + dj).clamp(0, cols - 1) as usize;
            grid.get(i, j)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(i, j) in live {
            grid.set(i, j, 1);
        }
        grid
    }

    #[test]
    fn constant_omits_out_of_range_neighbors() {
        // Corner (0, 0) sees only (0, 1), (1, 0), (1, 1).
        let grid = grid_with(4, 4, &[(0, 1), (1, 0), (1, 1), (3, 3)]);
        assert_eq!(sum_constant(&grid, 0, 0), 3);
        // Edge (0, 2) sees 5 in-range positions.
        assert_eq!(sum_constant(&grid, 0, 2), 2);
    }

    #[test]
    fn periodic_wraps_both_axes() {
        // (0, 0) reaches (3, 3) through the diagonal wrap.
        let grid = grid_with(4, 4, &[(3, 3)]);
        assert_eq!(sum_periodic(&grid, 0, 0), 1);
        assert_eq!(sum_periodic(&grid, 3, 3), 0);
        // A direct neighbor still counts normally: (3, 3) next to (2, 2).
        let grid = grid_with(4, 4, &[(2, 2)]);
        assert_eq!(sum_periodic(&grid, 3, 3), 1);
        assert_eq!(sum_periodic(&grid, 0, 0), 0);
    }

    #[test]
    fn mirror_resolves_past_edge_to_the_edge_cell() {
        // Live corner: the three clamped-to-self positions each count it.
        let grid = grid_with(3, 3, &[(0, 0)]);
        assert_eq!(sum_mirror(&grid, 0, 0), 3);
        // Edge cell (0, 1): positions (-1, 0..2) fold onto row 0.
        let grid = grid_with(3, 3, &[(0, 0), (0, 2)]);
        assert_eq!(sum_mirror(&grid, 0, 1), 4);
    }

    #[test]
    fn every_mode_sums_at_most_eight() {
        let mut grid = Grid::new(3, 3);
        for i in 0..3 {
            for j in 0..3 {
                grid.set(i, j, 1);
            }
        }
        for sum in [sum_constant, sum_periodic, sum_mirror] {
            for i in 0..3 {
                for j in [0, 2] {
                    assert!(sum(&grid, i, j) <= 8);
                }
            }
        }
    }

    #[test]
    fn ring_pass_leaves_interior_untouched() {
        let current = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let mut next = Grid::new(5, 5);
        Boundary::Constant.apply(&current, &mut next);
        for i in 1..4 {
            for j in 1..4 {
                assert_eq!(next.get(i, j), 0, "interior cell ({i}, {j}) written");
            }
        }
    }
}
