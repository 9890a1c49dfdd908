/// An error with the configuration.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "The error messages document the variants")]
pub enum ConfigError {
    #[error("The `min_periods` must be > 0")]
    InvalidMinPeriods,

    #[error("The chart dimensions must be > 0")]
    InvalidChartDimensions,
}
