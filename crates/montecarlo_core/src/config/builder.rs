//! Simulation Builder
//!
//! The SimulationBuilder provides a fluent API for describing categories one
//! at a time instead of as three parallel lists, and records category names
//! for later lookups.
//!
//! # Example
//!
//! ```ignore
//! use montecarlo_core::config::SimulationBuilder;
//!
//! let (config, metadata) = SimulationBuilder::new()
//!     .category("treatment A", 10.0, 1.0, 20)
//!     .category("treatment B", 11.0, 1.5, 20)
//!     .category("placebo", 12.0, 2.0, 30)
//!     .walks(10_000)
//!     .build()?;
//!
//! let control = metadata.control("placebo").unwrap();
//! ```

use super::SimulationConfig;
use super::metadata::SimulationMetadata;
use crate::error::Result;

/// Builder for creating simulation configurations category by category
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    means: Vec<f64>,
    std_devs: Vec<f64>,
    sample_counts: Vec<usize>,
    walks: usize,
    metadata: SimulationMetadata,
}

impl SimulationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named category drawn from Normal(`mean`, `std_dev`)
    #[must_use]
    pub fn category(
        mut self,
        name: impl Into<String>,
        mean: f64,
        std_dev: f64,
        samples: usize,
    ) -> Self {
        self.metadata.register_category(name);
        self.means.push(mean);
        self.std_devs.push(std_dev);
        self.sample_counts.push(samples);
        self
    }

    /// Set the number of walks
    #[must_use]
    pub fn walks(mut self, walks: usize) -> Self {
        self.walks = walks;
        self
    }

    /// Validate and build the configuration along with its category names
    pub fn build(self) -> Result<(SimulationConfig, SimulationMetadata)> {
        let config =
            SimulationConfig::new(self.means, self.std_devs, self.sample_counts, self.walks)?;
        Ok((config, self.metadata))
    }
}
