//! Double-buffered grid storage.

use rand::Rng;
use rand::rngs::StdRng;

pub(crate) const CELL_ALIVE: char = 'O';
pub(crate) const CELL_DEAD: char = ' ';

/// One generation of cells, row-major in a single flat buffer.
///
/// Cells are 0 (dead) or 1 (alive) so neighbor sums are plain integer adds.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Read a cell. Out-of-range access is a caller bug and panics; wrapping
    /// and clamping are boundary-condition concerns, not storage concerns.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(value <= 1, "cell value out of range: {value}");
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        let idx = self.idx(row, col);
        self.cells[idx] = value;
    }

    pub fn zero(&mut self) {
        self.cells.fill(0);
    }

    pub fn is_zeroed(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    /// The whole buffer, for splitting into disjoint per-batch row slices.
    pub fn as_mut_cells(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Fill with independent uniform draws from {0, 1}; returns the live
    /// fraction (diagnostic only).
    pub fn randomize(&mut self, rng: &mut StdRng) -> f32 {
        let mut live = 0usize;
        for cell in &mut self.cells {
            *cell = rng.gen_range(0..=1);
            live += usize::from(*cell);
        }
        live as f32 / self.cells.len() as f32
    }

    /// Row-major text rendering, one glyph per cell, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(if self.get(row, col) == 1 {
                    CELL_ALIVE
                } else {
                    CELL_DEAD
                });
            }
            out.push('\n');
        }
        out
    }
}
