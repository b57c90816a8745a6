// gol-gui - eframe front end for the Game of Life kernel.

use std::time::{Duration, Instant};

use eframe::egui;
use egui::Color32;
use gol_kernel::{Boundary, Config, Kernel};

mod ui;

const ROWS: usize = 52;
const COLS: usize = 52;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

pub struct LifeApp {
    pub kernel: Kernel,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

fn new_kernel(boundary: Boundary) -> Kernel {
    let config = Config {
        rows: ROWS,
        cols: COLS,
        with_threads: true,
        boundary,
        seed: None,
    };
    let mut kernel = Kernel::new(config).expect("fixed window dimensions are valid");
    kernel.clear();
    kernel
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            kernel: new_kernel(Boundary::Constant),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        }
    }
}

impl LifeApp {
    /// Swap in a kernel with a different boundary mode. The grid restarts
    /// empty; boundary modes are fixed per kernel lifetime.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        if boundary != self.kernel.boundary() {
            self.kernel = new_kernel(boundary);
            self.is_running = false;
        }
    }

    pub fn live_cell_count(&self) -> usize {
        let mut live = 0;
        for row in 0..self.kernel.rows() {
            for col in 0..self.kernel.cols() {
                live += self.kernel.cell_at(row, col) as usize;
            }
        }
        live
    }
}
