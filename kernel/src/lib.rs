// gol-kernel - Conway's Game of Life simulation core.
//
// Double-buffered fixed-size grid, row-batch parallel interior update and
// pluggable boundary conditions (constant / periodic / mirror). Rendering,
// argument parsing and pacing live in the cli/gui front ends.

mod boundary;
mod config;
mod grid;
mod kernel;
pub mod partition;
pub mod patterns;
pub mod rule;

pub use boundary::Boundary;
pub use config::{Config, ConfigError};
pub use kernel::Kernel;
pub use patterns::Pattern;
