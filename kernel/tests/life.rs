//! End-to-end behavior of the simulation kernel.

use gol_kernel::{Boundary, Config, Kernel, patterns};

fn kernel(rows: usize, cols: usize, boundary: Boundary, with_threads: bool) -> Kernel {
    let mut kernel = Kernel::new(Config {
        rows,
        cols,
        with_threads,
        boundary,
        seed: Some(42),
    })
    .unwrap();
    kernel.clear();
    kernel
}

fn live_cells(kernel: &Kernel) -> Vec<(usize, usize)> {
    let mut live = Vec::new();
    for i in 0..kernel.rows() {
        for j in 0..kernel.cols() {
            if kernel.cell_at(i, j) == 1 {
                live.push((i, j));
            }
        }
    }
    live
}

#[test]
fn block_is_a_still_life() {
    let mut kernel = kernel(10, 10, Boundary::Constant, false);
    let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
    for &(i, j) in &block {
        kernel.set_cell(i, j, 1);
    }
    kernel.step();
    assert_eq!(live_cells(&kernel), block);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut kernel = kernel(9, 9, Boundary::Constant, false);
    for j in 3..=5 {
        kernel.set_cell(4, j, 1);
    }
    kernel.step();
    assert_eq!(live_cells(&kernel), [(3, 4), (4, 4), (5, 4)]);
    kernel.step();
    assert_eq!(live_cells(&kernel), [(4, 3), (4, 4), (4, 5)]);
}

#[test]
fn glider_travels_one_diagonal_per_four_steps() {
    let mut kernel = kernel(16, 16, Boundary::Constant, false);
    let glider = &patterns::PATTERNS[0];
    assert_eq!(glider.name, "Glider");
    kernel.apply_pattern(glider);
    for _ in 0..4 {
        kernel.step();
    }
    let shifted: Vec<_> = glider.cells.iter().map(|&(i, j)| (i + 1, j + 1)).collect();
    let mut expected = shifted;
    expected.sort_unstable();
    assert_eq!(live_cells(&kernel), expected);
}

#[test]
fn threaded_and_inline_steps_agree() {
    // Same seed, same initial grid; the partitioning must not leak into the
    // result. 37 rows forces a remainder batch on most core counts.
    let config = Config {
        rows: 37,
        cols: 23,
        with_threads: false,
        boundary: Boundary::Periodic,
        seed: Some(1234),
    };
    let mut inline = Kernel::new(config.clone()).unwrap();
    let mut threaded = Kernel::new(Config {
        with_threads: true,
        ..config
    })
    .unwrap();
    assert_eq!(inline.to_text(), threaded.to_text());
    for step in 0..5 {
        inline.step();
        threaded.step();
        assert_eq!(
            inline.to_text(),
            threaded.to_text(),
            "grids diverged at step {step}"
        );
    }
}

#[test]
fn periodic_boundary_wraps_the_far_corner() {
    // (0,0), (0,7) and (7,0) are all wrap-neighbors of (7,7), which is born.
    let mut kernel = kernel(8, 8, Boundary::Periodic, false);
    for &(i, j) in &[(0, 0), (0, 7), (7, 0)] {
        kernel.set_cell(i, j, 1);
    }
    kernel.step();
    assert_eq!(kernel.cell_at(7, 7), 1);
}

#[test]
fn constant_boundary_keeps_the_far_corner_dead() {
    let mut kernel = kernel(8, 8, Boundary::Constant, false);
    for &(i, j) in &[(0, 0), (0, 7), (7, 0)] {
        kernel.set_cell(i, j, 1);
    }
    kernel.step();
    assert_eq!(kernel.cell_at(7, 7), 0);
}

#[test]
fn mirror_boundary_lets_a_lone_corner_survive() {
    // Reflection folds three past-the-edge positions onto the corner itself,
    // giving it a neighbor sum of 3; under Constant the same cell starves.
    let mut mirror = kernel(5, 5, Boundary::Mirror, false);
    mirror.set_cell(0, 0, 1);
    mirror.step();
    assert_eq!(mirror.cell_at(0, 0), 1);

    let mut constant = kernel(5, 5, Boundary::Constant, false);
    constant.set_cell(0, 0, 1);
    constant.step();
    assert_eq!(constant.cell_at(0, 0), 0);
}

#[test]
fn seeded_kernels_start_identical() {
    let config = Config {
        rows: 24,
        cols: 31,
        with_threads: false,
        boundary: Boundary::Constant,
        seed: Some(7),
    };
    let a = Kernel::new(config.clone()).unwrap();
    let b = Kernel::new(config).unwrap();
    assert_eq!(a.to_text(), b.to_text());
}
