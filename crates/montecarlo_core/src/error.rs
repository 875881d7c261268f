use thiserror::Error;

/// Errors raised while validating simulation parameters.
///
/// These are the only failures the crate produces: once a simulator has been
/// constructed, generating walks and scoring them cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The per-category parameter lists disagree on the number of categories
    #[error(
        "number of categories for means ({means}), std_devs ({std_devs}) and samples ({samples}) are unequal"
    )]
    MismatchedCategories {
        means: usize,
        std_devs: usize,
        samples: usize,
    },

    /// A category's parameters do not describe a valid normal distribution
    #[error(
        "invalid normal parameters for category {category} (mean={mean}, std_dev={std_dev}): std_dev must be non-negative and finite"
    )]
    InvalidDistribution {
        category: usize,
        mean: f64,
        std_dev: f64,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
