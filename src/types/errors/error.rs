use super::{
    ConfigError,
    MalformedInput,
};
use crate::types::LatticeSize;

/// Describes possible Errors that may occur when calling methods in this crate
#[derive(thiserror::Error, Debug)]
#[allow(missing_docs, reason = "The error messages document the variants")]
pub enum Error {
    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(
        "The group of lattice size {size} holds no observations. The grouping index is corrupt."
    )]
    EmptyGroup { size: LatticeSize },

    #[error("The statistic is undefined for the number of observations available.")]
    UndefinedStatistic,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render chart: {0}")]
    Render(String),
}

/// Shorthand for a `Result` with the crate `Error`.
pub type Result<T> = std::result::Result<T, Error>;
