//! Simulation kernel: owns the two grid buffers and advances one generation
//! per [`Kernel::step`].

use std::mem;
use std::thread;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{Config, ConfigError};
use crate::grid::Grid;
use crate::partition::{Batch, batch_ranges};
use crate::patterns::Pattern;
use crate::rule::next_value;

/// Fixed-size Game of Life simulation.
///
/// Holds the `current` and `next` generation buffers; each step updates the
/// interior over row batches (threaded or inline), applies the boundary
/// strategy to the edge ring, swaps the buffers and zeroes the new `next`.
pub struct Kernel {
    config: Config,
    current: Grid,
    next: Grid,
    batches: Vec<Batch>,
    n_cpus: usize,
    rng: StdRng,
    generation: u64,
}

impl Kernel {
    /// Build a kernel with a random initial condition.
    ///
    /// Detects the core count, partitions the rows (one worker per core when
    /// `with_threads`, otherwise a single whole-range batch) and logs the
    /// partitioning decision.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let n_cpus = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        let n_workers = if config.with_threads { n_cpus } else { 1 };
        let batches = batch_ranges(config.rows, n_workers);
        info!(
            "available CPU cores: {n_cpus}, using {} worker(s)",
            batches.len()
        );
        for (t, batch) in batches.iter().enumerate() {
            info!("batch {t:2}: rows {:4} - {:4}", batch.start, batch.end);
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut kernel = Self {
            current: Grid::new(config.rows, config.cols),
            next: Grid::new(config.rows, config.cols),
            batches,
            n_cpus,
            rng,
            generation: 0,
            config,
        };
        kernel.randomize();
        Ok(kernel)
    }

    /// Advance exactly one generation.
    ///
    /// Interior workers all join before the boundary pass starts, and the
    /// buffers swap only after the boundary pass finishes; steps are strictly
    /// sequential from the caller's point of view.
    pub fn step(&mut self) {
        self.step_interior();
        self.config.boundary.apply(&self.current, &mut self.next);
        mem::swap(&mut self.current, &mut self.next);
        self.next.zero();
        self.generation += 1;
    }

    /// Point query into the current generation.
    ///
    /// # Panics
    ///
    /// Out-of-range coordinates panic; storage never wraps or clamps.
    pub fn cell_at(&self, row: usize, col: usize) -> u8 {
        self.current.get(row, col)
    }

    /// Full-grid text rendering of the current generation.
    pub fn to_text(&self) -> String {
        self.current.to_text()
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of interior-update workers chosen at construction.
    pub fn worker_count(&self) -> usize {
        self.batches.len()
    }

    /// CPU cores detected at construction.
    pub fn core_count(&self) -> usize {
        self.n_cpus
    }

    /// Boundary mode fixed at construction.
    pub fn boundary(&self) -> crate::Boundary {
        self.config.boundary
    }

    /// Replace the state with a fresh random generation; returns the live
    /// fraction (diagnostic only).
    pub fn randomize(&mut self) -> f32 {
        self.next.zero();
        self.generation = 0;
        let fraction = self.current.randomize(&mut self.rng);
        info!("initial distribution: {fraction:.3}");
        fraction
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.current.zero();
        self.next.zero();
        self.generation = 0;
    }

    /// Write one cell of the current generation (0 or 1).
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) {
        self.current.set(row, col, value);
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let value = self.current.get(row, col);
        self.current.set(row, col, 1 - value);
    }

    /// Clear the grid and stamp a named pattern; cells outside the grid are
    /// skipped so patterns fit any sufficiently large domain.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.clear();
        for &(row, col) in pattern.cells {
            if row < self.config.rows && col < self.config.cols {
                self.current.set(row, col, 1);
            }
        }
    }

    /// Phase 1: rule applied to every interior cell, batch by batch.
    ///
    /// The next buffer is split into disjoint per-batch row slices, so each
    /// worker owns its write range structurally; `current` is shared
    /// read-only. The scope exit is the join barrier.
    fn step_interior(&mut self) {
        let current = &self.current;
        let cols = current.cols();
        let mut slices = Vec::with_capacity(self.batches.len());
        let mut rest = self.next.as_mut_cells();
        for batch in &self.batches {
            let (head, tail) = mem::take(&mut rest).split_at_mut(batch.len() * cols);
            slices.push(head);
            rest = tail;
        }
        if self.config.with_threads {
            thread::scope(|scope| {
                for (batch, out) in self.batches.iter().zip(slices) {
                    let batch = *batch;
                    scope.spawn(move || interior_pass(current, batch, out));
                }
            });
        } else {
            for (batch, out) in self.batches.iter().zip(slices) {
                interior_pass(current, *batch, out);
            }
        }
    }
}

/// Update the interior cells of one batch, writing into that batch's slice
/// of the next buffer. Boundary rows and columns inside the range stay
/// untouched for the boundary pass.
fn interior_pass(current: &Grid, batch: Batch, out: &mut [u8]) {
    let rows = current.rows();
    let cols = current.cols();
    for i in batch.start..batch.end {
        if i == 0 || i >= rows - 1 {
            continue;
        }
        let row_out = &mut out[(i - batch.start) * cols..(i - batch.start + 1) * cols];
        for j in 1..cols - 1 {
            let sum = current.get(i - 1, j - 1) + current.get(i - 1, j) + current.get(i - 1, j + 1)
                    + current.get(i,     j - 1)                         + current.get(i,     j + 1)
                    + current.get(i + 1, j - 1) + current.get(i + 1, j) + current.get(i + 1, j + 1);
            row_out[j] = next_value(current.get(i, j), sum);
        }
    }
}
