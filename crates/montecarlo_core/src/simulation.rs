//! Walk generation
//!
//! A [`MonteCarlo`] owns a validated [`SimulationConfig`] and a random source.
//! Each call to [`MonteCarlo::generate_walks`] returns a lazy iterator that
//! draws one [`Walk`] per step, advancing the owned random source as it goes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Distribution;
use tracing::{debug, trace};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::evaluate;
use crate::model::{Criteria, CriteriaOutcome, Walk};

/// Seed derived from the wall clock, in whole seconds since the Unix epoch.
///
/// Two simulators created within the same second share a seed. Prefer an
/// explicit seed anywhere results need to be reproduced.
#[must_use]
pub fn time_seed() -> u64 {
    jiff::Timestamp::now().as_second().unsigned_abs()
}

/// Repeated-trial simulator over independent normal categories
#[derive(Debug, Clone)]
pub struct MonteCarlo<R = SmallRng> {
    config: SimulationConfig,
    rng: R,
    seed: Option<u64>,
}

impl MonteCarlo<SmallRng> {
    /// Validate the per-category parameters and seed the random source
    pub fn new(
        means: Vec<f64>,
        std_devs: Vec<f64>,
        sample_counts: Vec<usize>,
        walks: usize,
        seed: u64,
    ) -> Result<Self> {
        let config = SimulationConfig::new(means, std_devs, sample_counts, walks)?;
        Ok(Self::from_config(config, seed))
    }

    #[must_use]
    pub fn from_config(config: SimulationConfig, seed: u64) -> Self {
        debug!(
            categories = config.category_count(),
            walks = config.walks(),
            seed,
            "created Monte Carlo simulator"
        );
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seed from the wall clock; see [`time_seed`]
    #[must_use]
    pub fn with_time_seed(config: SimulationConfig) -> Self {
        Self::from_config(config, time_seed())
    }
}

impl<R: Rng> MonteCarlo<R> {
    /// Use a caller-provided random source
    pub fn with_rng(config: SimulationConfig, rng: R) -> Self {
        debug!(
            categories = config.category_count(),
            walks = config.walks(),
            "created Monte Carlo simulator with external rng"
        );
        Self {
            config,
            rng,
            seed: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed the random source was created from, if this simulator seeded it
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Lazily generate `config.walks()` walks.
    ///
    /// Calling this again yields fresh draws, not a replay: the random source
    /// keeps its state between calls.
    pub fn generate_walks(&mut self) -> Walks<'_, R> {
        Walks {
            config: &self.config,
            rng: &mut self.rng,
            index: 0,
        }
    }

    /// Draw a single walk outside of the walk sequence
    pub fn generate_walk(&mut self) -> Walk {
        sample_walk(&self.config, &mut self.rng)
    }

    /// Generate every walk and score it against `criteria`
    pub fn apply_criteria(&mut self, criteria: &Criteria) -> CriteriaOutcome {
        evaluate::apply_criteria(self.generate_walks(), criteria)
    }
}

fn sample_walk<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Walk {
    let mut distributions = Vec::with_capacity(config.category_count());
    for (normal, samples) in config.categories() {
        distributions.push((0..samples).map(|_| normal.sample(rng)).collect());
    }
    Walk::new(distributions)
}

/// Lazy sequence of walks borrowed from a [`MonteCarlo`]
#[derive(Debug)]
pub struct Walks<'a, R> {
    config: &'a SimulationConfig,
    rng: &'a mut R,
    index: usize,
}

impl<R: Rng> Iterator for Walks<'_, R> {
    type Item = Walk;

    fn next(&mut self) -> Option<Walk> {
        if self.index >= self.config.walks() {
            return None;
        }
        let walk = sample_walk(self.config, &mut *self.rng);
        trace!(
            walk = self.index,
            samples = walk.sample_count(),
            "generated walk"
        );
        self.index += 1;
        Some(walk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.walks() - self.index;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Walks<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn two_category_config(walks: usize) -> SimulationConfig {
        SimulationConfig::new(vec![10.0, 12.0], vec![1.0, 2.0], vec![20, 30], walks).unwrap()
    }

    #[test]
    fn test_generates_configured_shape() {
        let mut mc = MonteCarlo::from_config(two_category_config(10), 42);

        let walks = mc.generate_walks();
        assert_eq!(walks.len(), 10);

        let mut count = 0;
        for walk in walks {
            assert_eq!(walk.category_count(), 2);
            assert_eq!(walk.distributions[0].len(), 20);
            assert_eq!(walk.distributions[1].len(), 30);
            count += 1;
        }
        assert_eq!(count, 10);
    }

    #[test]
    fn test_zero_walks_yields_nothing() {
        let mut mc = MonteCarlo::from_config(two_category_config(0), 1);
        assert_eq!(mc.generate_walks().count(), 0);
    }

    #[test]
    fn test_same_seed_same_walks() {
        let mut a = MonteCarlo::from_config(two_category_config(3), 7);
        let mut b = MonteCarlo::from_config(two_category_config(3), 7);
        let walks_a: Vec<Walk> = a.generate_walks().collect();
        let walks_b: Vec<Walk> = b.generate_walks().collect();
        assert_eq!(walks_a, walks_b);
        assert_eq!(a.seed(), Some(7));
    }

    #[test]
    fn test_second_call_draws_fresh_samples() {
        let mut mc = MonteCarlo::from_config(two_category_config(2), 99);
        let first: Vec<Walk> = mc.generate_walks().collect();
        let second: Vec<Walk> = mc.generate_walks().collect();
        assert_eq!(second.len(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_external_rng() {
        let config = two_category_config(4);
        let mut mc = MonteCarlo::with_rng(config, StdRng::seed_from_u64(3));
        assert_eq!(mc.seed(), None);
        assert_eq!(mc.generate_walks().count(), 4);
    }

    #[test]
    fn test_zero_std_dev_returns_mean() {
        let config = SimulationConfig::new(vec![3.5], vec![0.0], vec![8], 2).unwrap();
        let mut mc = MonteCarlo::from_config(config, 5);
        for walk in mc.generate_walks() {
            assert!(walk.distributions[0].iter().all(|&v| v == 3.5));
        }
    }

    #[test]
    fn test_sample_moments_track_parameters() {
        let config = SimulationConfig::new(vec![-2.0], vec![3.0], vec![20_000], 1).unwrap();
        let mut mc = MonteCarlo::from_config(config, 2024);
        let walk = mc.generate_walk();
        let samples = walk.category(0).unwrap();

        let mean = crate::stats::mean(samples);
        let std = crate::stats::population_std_dev(samples);
        assert!((mean + 2.0).abs() < 0.1, "mean ~= -2, got {mean}");
        assert!((std - 3.0).abs() < 0.1, "std ~= 3, got {std}");
    }

    #[test]
    fn test_new_rejects_mismatch() {
        let result = MonteCarlo::new(vec![10.0, 12.0, 10.0], vec![1.0, 2.0], vec![20, 30], 10, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_negative_std_dev() {
        let result = MonteCarlo::new(vec![0.0], vec![-1.0], vec![5], 1, 1);
        assert!(matches!(
            result,
            Err(crate::error::ConfigError::InvalidDistribution { category: 0, .. })
        ));
    }

    #[test]
    fn test_time_seed_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(time_seed() > 1_577_836_800);
    }
}
