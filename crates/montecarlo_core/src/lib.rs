//! Monte Carlo criterion simulation library
//!
//! This crate estimates how often a pass/fail decision rule misclassifies
//! samples. Each category is modeled as an independent normal distribution;
//! the simulator draws samples for every category across many repeated walks
//! and the evaluator scores them against one designated control category:
//! - non-control samples below the threshold are false negatives
//! - control samples above the threshold are false positives
//!
//! Both sets are summarized by minimum, mean, median, maximum and population
//! standard deviation, with NaN standing in when a set is empty.
//!
//! ```ignore
//! use montecarlo_core::{Criteria, ControlCategory, MonteCarlo};
//!
//! let mut mc = MonteCarlo::new(vec![10.0, 12.0], vec![1.0, 2.0], vec![20, 30], 1_000, 42)?;
//! let outcome = mc.apply_criteria(&Criteria::new(ControlCategory::Last, 11.0));
//! println!("false negative rate: {}", outcome.false_negatives.rate());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod evaluate;
pub mod logging;
pub mod simulation;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{SimulationBuilder, SimulationConfig, SimulationMetadata};
pub use error::{ConfigError, Result};
pub use evaluate::apply_criteria;
pub use logging::init_logging;
pub use model::{
    ComparisonTest, ControlCategory, Criteria, CriteriaOutcome, Pool, PoolStatistics, Walk,
};
pub use simulation::{MonteCarlo, Walks, time_seed};
