//! Criterion evaluation
//!
//! Scores simulated walks against a [`Criteria`]. Every sample is assigned to
//! the control or non-control pool by its category index, then:
//!
//! - non-control samples strictly below the threshold are false negatives
//! - control samples strictly above the threshold are false positives
//!
//! The directions are fixed. `Criteria::test` does not change them; a
//! non-default test is reported with a warning so callers notice that it had
//! no effect.

use tracing::{debug, warn};

use crate::model::{ComparisonTest, Criteria, CriteriaOutcome, Pool, PoolStatistics};

/// Samples seen in one pool and the ones that were misclassified
#[derive(Debug, Default)]
struct PoolTally {
    size: usize,
    misclassified: Vec<f64>,
}

impl PoolTally {
    fn record(&mut self, samples: &[f64], is_misclassified: impl Fn(f64) -> bool) {
        self.size += samples.len();
        self.misclassified
            .extend(samples.iter().copied().filter(|&v| is_misclassified(v)));
    }

    fn into_statistics(self) -> PoolStatistics {
        PoolStatistics::from_values(self.misclassified, self.size)
    }
}

/// Score `walks` against `criteria`.
///
/// Accepts anything that yields per-category sample arrays: the iterator from
/// [`crate::simulation::MonteCarlo::generate_walks`], a `Vec<Walk>`, or plain
/// `Vec<Vec<f64>>` walks. The result only depends on which samples end up in
/// each pool, so the order of walks does not matter.
pub fn apply_criteria<I, W>(walks: I, criteria: &Criteria) -> CriteriaOutcome
where
    I: IntoIterator<Item = W>,
    W: AsRef<[Vec<f64>]>,
{
    if criteria.test != ComparisonTest::LessThan {
        warn!(
            test = ?criteria.test,
            "comparison test is ignored; false negatives use < and false positives use >"
        );
    }

    let threshold = criteria.threshold;
    let mut control = PoolTally::default();
    let mut non_control = PoolTally::default();
    let mut reported_missing_control = false;
    let mut walk_count = 0usize;

    for walk in walks {
        let distributions = walk.as_ref();
        let control_index = criteria.control.resolve(distributions.len());

        if control_index.is_none() && !distributions.is_empty() && !reported_missing_control {
            warn!(
                control = ?criteria.control,
                categories = distributions.len(),
                "control category outside walk; all samples treated as non-control"
            );
            reported_missing_control = true;
        }

        for (category, samples) in distributions.iter().enumerate() {
            match Pool::of(category, control_index) {
                Pool::Control => control.record(samples, |v| v > threshold),
                Pool::NonControl => non_control.record(samples, |v| v < threshold),
            }
        }
        walk_count += 1;
    }

    debug!(
        walks = walk_count,
        threshold,
        control_pool = control.size,
        non_control_pool = non_control.size,
        false_negatives = non_control.misclassified.len(),
        false_positives = control.misclassified.len(),
        "applied criteria"
    );

    CriteriaOutcome {
        false_negatives: non_control.into_statistics(),
        false_positives: control.into_statistics(),
    }
}
