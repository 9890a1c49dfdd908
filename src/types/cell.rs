use serde::{
    Serialize,
    Serializer,
};

use super::{
    Error,
    Result,
};

/// A single value of an aggregated table.
/// A statistic that does not exist, because the group has too few observations
/// at that rank or no observation at all, is `Absent` rather than a numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Cell {
    /// The statistic is defined.
    Present(f64),
    /// The statistic is undefined.
    #[default]
    Absent,
}

impl Cell {
    /// `true` if the value is defined.
    #[inline(always)]
    pub fn is_present(&self) -> bool {
        matches!(self, Cell::Present(_))
    }

    /// `true` if the value is undefined.
    #[inline(always)]
    pub fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }

    /// The inner value, if any.
    #[inline(always)]
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Present(v) => Some(*v),
            Cell::Absent => None,
        }
    }

    /// The inner value, or `Error::UndefinedStatistic` for consumers that cannot work without one.
    pub fn try_value(&self) -> Result<f64> {
        self.value().ok_or(Error::UndefinedStatistic)
    }
}

impl From<Option<f64>> for Cell {
    #[inline(always)]
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Cell::Present(v),
            None => Cell::Absent,
        }
    }
}

impl From<Cell> for Option<f64> {
    #[inline(always)]
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

/// `Absent` is written as an empty field.
impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Present(v) => write!(f, "{v}"),
            Cell::Absent => Ok(()),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Cell::Present(v) => serializer.serialize_some(v),
            Cell::Absent => serializer.serialize_none(),
        }
    }
}
