use getset::CopyGetters;

use crate::types::{
    ConfigError,
    StdConvention,
};

/// Define how the per size statistics are computed.
///
/// A single `Config` drives both the expanding and the snapshot aggregation,
/// so both always agree on the standard deviation convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct Config {
    /// Which variance denominator to use.
    #[getset(get_copy = "pub")]
    convention: StdConvention,

    /// The minimum number of observations before an expanding statistic is reported.
    /// Ranks below it are absent in the expanding series.
    #[getset(get_copy = "pub")]
    min_periods: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convention: StdConvention::Sample,
            min_periods: 1,
        }
    }
}

impl Config {
    /// Create a new Config.
    ///
    /// # Arguments:
    /// `convention`: The standard deviation convention used by all aggregators.
    /// `min_periods`: The number of observations a group must have seen before its
    /// running mean and std are reported. Must be > 0.
    ///
    /// # Returns:
    /// Either a valid Config or an Error
    pub fn new(convention: StdConvention, min_periods: usize) -> Result<Self, ConfigError> {
        if min_periods == 0 {
            return Err(ConfigError::InvalidMinPeriods);
        }

        Ok(Self {
            convention,
            min_periods,
        })
    }
}
