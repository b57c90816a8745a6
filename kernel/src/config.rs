//! Run configuration for the simulation kernel.

use thiserror::Error;

use crate::boundary::Boundary;

/// Kernel configuration, created by the caller and never mutated afterwards.
///
/// Validated once by [`crate::Kernel::new`]; the grid keeps the configured
/// extent for the lifetime of the kernel.
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of grid rows. Must be at least 3.
    pub rows: usize,
    /// Number of grid columns. Must be at least 3.
    pub cols: usize,
    /// Partition the interior update over one worker thread per CPU core.
    pub with_threads: bool,
    /// How edge cells resolve neighbors outside the grid.
    pub boundary: Boundary,
    /// Fixed seed for the initial condition; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 29,
            cols: 80,
            with_threads: true,
            boundary: Boundary::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The boundary ring and interior are only well-defined from 3x3 up.
    #[error("grid of {rows}x{cols} is too small, need at least 3x3")]
    GridTooSmall { rows: usize, cols: usize },
}

impl Config {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 3 || self.cols < 3 {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn degenerate_dimensions_rejected() {
        for (rows, cols) in [(0, 80), (29, 0), (2, 80), (29, 2), (1, 1)] {
            let config = Config {
                rows,
                cols,
                ..Config::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::GridTooSmall { rows, cols })
            );
        }
    }
}
