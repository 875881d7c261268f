//! Scoring results
//!
//! Output types returned by the criterion evaluator.

use serde::{Deserialize, Serialize};

use crate::stats;

/// Summary of one set of misclassified samples.
///
/// When no sample was misclassified `values` is empty and every statistic is
/// `f64::NAN`. Equality compares floats with `f64::total_cmp`, so two empty
/// summaries are equal even though their statistics are NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolStatistics {
    /// Misclassified samples in ascending order
    pub values: Vec<f64>,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
    pub maximum: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Number of samples in the pool the values were taken from
    pub pool_size: usize,
}

impl PoolStatistics {
    /// Summarize `values`, which were selected out of a pool of `pool_size` samples
    #[must_use]
    pub fn from_values(mut values: Vec<f64>, pool_size: usize) -> Self {
        if values.is_empty() {
            return Self::empty(pool_size);
        }

        stats::sort_ascending(&mut values);
        let minimum = values[0];
        let maximum = values[values.len() - 1];

        Self {
            minimum,
            mean: stats::mean(&values),
            median: stats::median_sorted(&values),
            maximum,
            std_dev: stats::population_std_dev(&values),
            values,
            pool_size,
        }
    }

    /// Summary for a set with no misclassified samples
    #[must_use]
    pub fn empty(pool_size: usize) -> Self {
        Self {
            values: Vec::new(),
            minimum: f64::NAN,
            mean: f64::NAN,
            median: f64::NAN,
            maximum: f64::NAN,
            std_dev: f64::NAN,
            pool_size,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of misclassified samples
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Fraction of the pool that was misclassified; NaN for an empty pool
    #[must_use]
    pub fn rate(&self) -> f64 {
        if self.pool_size == 0 {
            f64::NAN
        } else {
            self.values.len() as f64 / self.pool_size as f64
        }
    }

    /// `(values, minimum, mean, median, maximum, std_dev)`
    #[must_use]
    pub fn as_tuple(&self) -> (&[f64], f64, f64, f64, f64, f64) {
        (
            self.values.as_slice(),
            self.minimum,
            self.mean,
            self.median,
            self.maximum,
            self.std_dev,
        )
    }
}

impl PartialEq for PoolStatistics {
    fn eq(&self, other: &Self) -> bool {
        let same = |a: f64, b: f64| a.total_cmp(&b).is_eq();
        self.pool_size == other.pool_size
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(&a, &b)| same(a, b))
            && same(self.minimum, other.minimum)
            && same(self.mean, other.mean)
            && same(self.median, other.median)
            && same(self.maximum, other.maximum)
            && same(self.std_dev, other.std_dev)
    }
}

/// False negatives and false positives produced by one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaOutcome {
    /// Non-control samples below the threshold
    pub false_negatives: PoolStatistics,
    /// Control samples above the threshold
    pub false_positives: PoolStatistics,
}

impl CriteriaOutcome {
    #[must_use]
    pub fn into_pair(self) -> (PoolStatistics, PoolStatistics) {
        (self.false_negatives, self.false_positives)
    }
}
