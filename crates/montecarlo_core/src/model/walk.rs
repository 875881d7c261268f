use serde::{Deserialize, Serialize};

/// Samples drawn for every category during one walk.
///
/// Indexed `[category][sample]`. Walks are produced one at a time by
/// [`crate::simulation::MonteCarlo::generate_walks`] and are usually consumed
/// straight away by the criterion evaluator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    pub distributions: Vec<Vec<f64>>,
}

impl Walk {
    #[must_use]
    pub fn new(distributions: Vec<Vec<f64>>) -> Self {
        Self { distributions }
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.distributions.len()
    }

    /// Samples for a single category
    #[must_use]
    pub fn category(&self, index: usize) -> Option<&[f64]> {
        self.distributions.get(index).map(Vec::as_slice)
    }

    /// Total number of samples across all categories
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.distributions.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<f64>> {
        self.distributions
    }
}

impl From<Vec<Vec<f64>>> for Walk {
    fn from(distributions: Vec<Vec<f64>>) -> Self {
        Self { distributions }
    }
}

impl AsRef<[Vec<f64>]> for Walk {
    fn as_ref(&self) -> &[Vec<f64>] {
        &self.distributions
    }
}
