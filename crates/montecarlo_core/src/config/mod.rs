//! Simulation configuration
//!
//! The main configuration type is `SimulationConfig`, which contains everything
//! needed to run a simulation: one normal distribution per category plus the
//! number of walks to repeat it for.
//!
//! # Builder DSL
//!
//! For a more ergonomic way to describe categories, use the builder:
//!
//! ```ignore
//! use montecarlo_core::config::SimulationBuilder;
//!
//! let (config, metadata) = SimulationBuilder::new()
//!     .category("experimental", 10.0, 1.0, 20)
//!     .category("control", 12.0, 2.0, 30)
//!     .walks(1_000)
//!     .build()?;
//! ```

use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub mod builder;
pub mod metadata;

pub use builder::SimulationBuilder;
pub use metadata::SimulationMetadata;

/// Complete, validated simulation configuration.
///
/// Category `i` is described by `means[i]`, `std_devs[i]` and
/// `sample_counts[i]`. Instances can only be obtained through validation, so
/// the three lists always agree on the number of categories and every
/// category describes a valid normal distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigParts")]
pub struct SimulationConfig {
    means: Vec<f64>,
    std_devs: Vec<f64>,
    sample_counts: Vec<usize>,
    walks: usize,

    #[serde(skip)]
    distributions: Vec<Normal<f64>>,
}

/// Unvalidated wire shape of a configuration
#[derive(Deserialize)]
struct ConfigParts {
    means: Vec<f64>,
    std_devs: Vec<f64>,
    sample_counts: Vec<usize>,
    #[serde(default)]
    walks: usize,
}

impl TryFrom<ConfigParts> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(parts: ConfigParts) -> Result<Self> {
        Self::new(parts.means, parts.std_devs, parts.sample_counts, parts.walks)
    }
}

impl SimulationConfig {
    /// Validate per-category parameters and build a configuration.
    ///
    /// A walk count of zero is valid and produces no walks. A standard
    /// deviation of zero is valid and makes every sample equal to the mean.
    pub fn new(
        means: Vec<f64>,
        std_devs: Vec<f64>,
        sample_counts: Vec<usize>,
        walks: usize,
    ) -> Result<Self> {
        if means.len() != std_devs.len() || means.len() != sample_counts.len() {
            return Err(ConfigError::MismatchedCategories {
                means: means.len(),
                std_devs: std_devs.len(),
                samples: sample_counts.len(),
            });
        }

        let distributions = means
            .iter()
            .zip(&std_devs)
            .enumerate()
            .map(|(category, (&mean, &std_dev))| {
                let invalid = ConfigError::InvalidDistribution {
                    category,
                    mean,
                    std_dev,
                };
                // Normal::new accepts a negative std_dev, so check it here
                if !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(invalid);
                }
                Normal::new(mean, std_dev).map_err(|_| invalid)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            means,
            std_devs,
            sample_counts,
            walks,
            distributions,
        })
    }

    #[must_use]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    #[must_use]
    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }

    #[must_use]
    pub fn sample_counts(&self) -> &[usize] {
        &self.sample_counts
    }

    /// Number of times the simulation is repeated
    #[must_use]
    pub fn walks(&self) -> usize {
        self.walks
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.means.len()
    }

    /// Total number of samples drawn for a single walk
    #[must_use]
    pub fn samples_per_walk(&self) -> usize {
        self.sample_counts.iter().sum()
    }

    /// Return a copy of this configuration with a different walk count
    #[must_use]
    pub fn with_walks(&self, walks: usize) -> Self {
        Self {
            walks,
            ..self.clone()
        }
    }

    /// Sampling distributions paired with their sample counts, in category order
    pub(crate) fn categories(&self) -> impl Iterator<Item = (&Normal<f64>, usize)> {
        self.distributions
            .iter()
            .zip(self.sample_counts.iter().copied())
    }
}
