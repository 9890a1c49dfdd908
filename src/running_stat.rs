use getset::CopyGetters;

use crate::types::{
    Cell,
    StdConvention,
};

/// Welford online accumulator for the mean and variance of a stream of values.
///
/// Updating is O(1) per value and avoids the cancellation of the naive
/// sum / sum-of-squares formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, CopyGetters)]
pub struct RunningStat {
    /// Number of values added so far.
    #[getset(get_copy = "pub")]
    count: u64,
    mean: f64,
    /// Sum of squared deviations from the running mean.
    #[getset(get_copy = "pub")]
    sum_sq_deviation: f64,
}

impl RunningStat {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new value to update the estimates
    #[inline]
    pub fn add(&mut self, val: f64) {
        self.count += 1;
        let delta = val - self.mean;
        self.mean += delta / self.count as f64;
        // Must use the updated mean here.
        self.sum_sq_deviation += delta * (val - self.mean);
        assert2::debug_assert!(self.sum_sq_deviation > -1e-12);
    }

    /// The arithmetic mean of all values added so far, `None` before the first value.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// The variance under the given `convention`, `None` if too few values were added.
    #[inline]
    pub fn variance(&self, convention: StdConvention) -> Option<f64> {
        // Rounding may leave a tiny negative residue for constant inputs.
        convention
            .denominator(self.count)
            .map(|d| (self.sum_sq_deviation / d).max(0.0))
    }

    /// Return the standard deviation under the given `convention`.
    #[inline]
    pub fn std_dev(&self, convention: StdConvention) -> Cell {
        self.variance(convention).map(f64::sqrt).into()
    }

    /// Combine two accumulators over disjoint sets of values into one,
    /// as if all values had been added to a single accumulator.
    pub fn merge(&self, other: &Self) -> Self {
        let count = self.count + other.count;
        if count == 0 {
            return Self::new();
        }
        let delta = other.mean - self.mean;
        let mean = self.mean + delta * other.count as f64 / count as f64;
        let sum_sq_deviation = self.sum_sq_deviation
            + other.sum_sq_deviation
            + delta * delta * self.count as f64 * other.count as f64 / count as f64;

        Self {
            count,
            mean,
            sum_sq_deviation,
        }
    }
}

impl Extend<f64> for RunningStat {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for val in iter {
            self.add(val);
        }
    }
}

impl FromIterator<f64> for RunningStat {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut stat = Self::new();
        stat.extend(iter);
        stat
    }
}
