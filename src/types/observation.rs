use derive_more::{
    Display,
    From,
    Into,
};
use getset::CopyGetters;
use serde::Serialize;

use super::MalformedInput;

/// The lattice dimension used for a batch of trials, e.g. `100` for a 100x100 lattice.
/// Observations are grouped by it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Serialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct LatticeSize(u32);

/// A single trial of a percolation simulation: the lattice size it ran on and the
/// occupation probability at which the lattice started to percolate.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
pub struct Observation {
    /// The lattice size of the trial.
    #[getset(get_copy = "pub")]
    size: LatticeSize,

    /// The measured percolation threshold.
    #[getset(get_copy = "pub")]
    threshold: f64,
}

impl Observation {
    /// Create a new `Observation`.
    #[inline(always)]
    pub fn new(size: u32, threshold: f64) -> Self {
        Self {
            size: LatticeSize(size),
            threshold,
        }
    }

    /// Parse an `Observation` from the raw `size` and `threshold` fields of a record.
    /// `row` is the 1-based data row the fields come from and is only used for error reporting.
    ///
    /// A field that is absent or blank is reported as missing, never defaulted.
    pub fn parse(
        row: usize,
        size: Option<&str>,
        threshold: Option<&str>,
    ) -> Result<Self, MalformedInput> {
        let size = non_blank(size).ok_or(MalformedInput::MissingField {
            row,
            column: SIZE_COLUMN,
        })?;
        let threshold = non_blank(threshold).ok_or(MalformedInput::MissingField {
            row,
            column: THRESHOLD_COLUMN,
        })?;

        let size = size
            .parse::<u32>()
            .map_err(|_| MalformedInput::InvalidSize {
                row,
                value: size.to_string(),
            })?;
        let threshold = threshold
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())
            .ok_or_else(|| MalformedInput::InvalidThreshold {
                row,
                value: threshold.to_string(),
            })?;

        Ok(Self::new(size, threshold))
    }
}

/// Name of the column holding the lattice size.
pub const SIZE_COLUMN: &str = "size";

/// Name of the column holding the percolation threshold.
pub const THRESHOLD_COLUMN: &str = "threshold";

fn non_blank(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|f| !f.is_empty())
}
