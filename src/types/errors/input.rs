/// A record of the observation table that cannot be turned into an `Observation`.
/// Rows are numbered from 1, not counting the header.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "The error messages document the variants")]
pub enum MalformedInput {
    #[error("The header has no `{column}` column.")]
    MissingColumn { column: &'static str },

    #[error("Row {row} has no value for `{column}`.")]
    MissingField { row: usize, column: &'static str },

    #[error("Row {row}: `size` must be a non-negative integer, got `{value}`.")]
    InvalidSize { row: usize, value: String },

    #[error("Row {row}: `threshold` must be a finite number, got `{value}`.")]
    InvalidThreshold { row: usize, value: String },
}
