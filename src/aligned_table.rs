use getset::{
    CopyGetters,
    Getters,
};
use tracing::debug;

use crate::{
    expanding::{
        ExpandingPoint,
        ExpandingSeries,
    },
    types::{
        Cell,
        LatticeSize,
    },
};

/// One statistic laid out as rows of rank and columns of lattice size.
/// Every column holds exactly `num_rows` cells.
#[derive(Debug, Clone, PartialEq, Default, CopyGetters)]
pub struct Frame {
    /// The number of ranks, i.e. the length of the longest group.
    #[getset(get_copy = "pub")]
    num_rows: usize,
    columns: Vec<Vec<Cell>>,
}

impl Frame {
    fn from_columns(num_rows: usize, columns: Vec<Vec<Cell>>) -> Self {
        assert2::debug_assert!(columns.iter().all(|c| c.len() == num_rows));
        Self { num_rows, columns }
    }

    /// The number of columns.
    #[inline(always)]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// The column at position `col`.
    pub fn column(&self, col: usize) -> Option<&[Cell]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    /// The cell at the 1-based `rank` in column `col`.
    /// `None` if the position lies outside of the frame.
    pub fn cell(&self, rank: usize, col: usize) -> Option<Cell> {
        let row = rank.checked_sub(1)?;
        self.columns.get(col)?.get(row).copied()
    }

    /// The cells of the 1-based `rank` across all columns.
    pub fn row(&self, rank: usize) -> Option<Vec<Cell>> {
        let row = rank.checked_sub(1).filter(|r| *r < self.num_rows)?;
        Some(Vec::from_iter(self.columns.iter().map(|c| c[row])))
    }

    /// Iterate over `(rank, cells)` of all rows in increasing rank.
    pub fn rows(&self) -> impl Iterator<Item = (usize, Vec<Cell>)> + '_ {
        (1..=self.num_rows).map(move |rank| {
            let row = rank - 1;
            (rank, Vec::from_iter(self.columns.iter().map(|c| c[row])))
        })
    }
}

/// The expanding series of all groups aligned on a common rank axis.
///
/// The rank axis spans `1..=max(group length)`. Ranks past the end of a shorter group
/// are `Cell::Absent`, filling them in is left to the consumer.
#[derive(Debug, Clone, PartialEq, Default, Getters)]
pub struct AlignedTable {
    /// The column labels, in first-seen order.
    #[getset(get = "pub")]
    sizes: Vec<LatticeSize>,

    /// The running means.
    #[getset(get = "pub")]
    mean: Frame,

    /// The running standard deviations.
    #[getset(get = "pub")]
    std: Frame,
}

impl AlignedTable {
    /// Reshape the per group series into one rectangular table.
    /// Column order follows the order of `series`.
    pub fn new(series: &[ExpandingSeries]) -> Self {
        let num_rows = series.iter().map(ExpandingSeries::len).max().unwrap_or(0);

        let pad = |extract: fn(&ExpandingPoint) -> Cell| {
            Vec::from_iter(series.iter().map(|s| {
                let mut column = Vec::with_capacity(num_rows);
                column.extend(s.points().iter().map(extract));
                column.resize(num_rows, Cell::Absent);
                column
            }))
        };
        let mean = Frame::from_columns(num_rows, pad(|p| p.mean()));
        let std = Frame::from_columns(num_rows, pad(|p| p.std()));
        debug!(
            "aligned {} series into a table of {num_rows} ranks",
            series.len()
        );

        Self {
            sizes: Vec::from_iter(series.iter().map(ExpandingSeries::size)),
            mean,
            std,
        }
    }

    /// The number of ranks.
    #[inline(always)]
    pub fn num_rows(&self) -> usize {
        self.mean.num_rows()
    }

    /// `true` if the table has no columns.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The column position of a lattice size.
    pub fn position(&self, size: LatticeSize) -> Option<usize> {
        self.sizes.iter().position(|s| *s == size)
    }

    /// The mean and std cells at `(rank, size)`.
    pub fn cell(&self, rank: usize, size: LatticeSize) -> Option<(Cell, Cell)> {
        let col = self.position(size)?;
        Some((self.mean.cell(rank, col)?, self.std.cell(rank, col)?))
    }
}
