use std::fmt::Formatter;

use serde::Serialize;

/// Which denominator to use when turning the sum of squared deviations into a variance.
///
/// The same convention always drives both the expanding and the snapshot statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StdConvention {
    /// Unbiased estimator, divides by `n - 1`. Undefined for a single observation.
    #[default]
    Sample,
    /// Divides by `n`. Zero for a single observation.
    Population,
}

impl StdConvention {
    /// The smallest number of observations for which the variance is defined.
    #[inline(always)]
    pub fn min_count(&self) -> u64 {
        match self {
            StdConvention::Sample => 2,
            StdConvention::Population => 1,
        }
    }

    /// The denominator applied to the sum of squared deviations of `count` observations,
    /// or `None` if the variance is undefined for that many observations.
    #[inline(always)]
    pub fn denominator(&self, count: u64) -> Option<f64> {
        if count < self.min_count() {
            return None;
        }
        match self {
            StdConvention::Sample => Some((count - 1) as f64),
            StdConvention::Population => Some(count as f64),
        }
    }
}

impl std::fmt::Display for StdConvention {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StdConvention::Sample => write!(f, "sample"),
            StdConvention::Population => write!(f, "population"),
        }
    }
}
