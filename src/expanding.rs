use getset::{
    CopyGetters,
    Getters,
};
use tracing::trace;

use crate::{
    config::Config,
    grouping_index::{
        Group,
        GroupingIndex,
    },
    running_stat::RunningStat,
    types::{
        Cell,
        Error,
        LatticeSize,
        Result,
    },
};

/// The running statistics of a group after admitting its first `rank` observations.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
pub struct ExpandingPoint {
    /// 1-based number of observations admitted so far.
    #[getset(get_copy = "pub")]
    rank: usize,

    /// Mean of the first `rank` observations.
    #[getset(get_copy = "pub")]
    mean: Cell,

    /// Standard deviation of the first `rank` observations.
    #[getset(get_copy = "pub")]
    std: Cell,
}

/// The running mean and standard deviation of one group, one point per observation.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct ExpandingSeries {
    /// The lattice size of the group.
    #[getset(get_copy = "pub")]
    size: LatticeSize,

    /// Points ordered by increasing rank, starting at rank 1.
    #[getset(get = "pub")]
    points: Vec<ExpandingPoint>,
}

impl ExpandingSeries {
    /// Fold a group left to right into its expanding series.
    ///
    /// Ranks below `config.min_periods()` are reported as absent.
    /// Groups built by the `GroupingIndex` are never empty. Should an empty one show up
    /// regardless, `Error::EmptyGroup` is returned.
    pub fn new(group: &Group, config: &Config) -> Result<Self> {
        if group.is_empty() {
            return Err(Error::EmptyGroup { size: group.size() });
        }

        let convention = config.convention();
        let min_periods = config.min_periods();
        let mut stat = RunningStat::new();
        let mut points = Vec::with_capacity(group.len());
        for (i, threshold) in group.thresholds().iter().enumerate() {
            stat.add(*threshold);
            let rank = i + 1;
            let point = if rank < min_periods {
                ExpandingPoint {
                    rank,
                    mean: Cell::Absent,
                    std: Cell::Absent,
                }
            } else {
                ExpandingPoint {
                    rank,
                    mean: stat.mean().into(),
                    std: stat.std_dev(convention),
                }
            };
            points.push(point);
        }
        trace!(
            "expanding series of size {}: {} points, final {:?}",
            group.size(),
            points.len(),
            points.last()
        );

        Ok(Self {
            size: group.size(),
            points,
        })
    }

    /// The number of points, which equals the number of observations of the group.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the series holds no points.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point at the 1-based `rank`, if the group has that many observations.
    pub fn at_rank(&self, rank: usize) -> Option<&ExpandingPoint> {
        rank.checked_sub(1).and_then(|i| self.points.get(i))
    }
}

/// Compute the expanding series of every group, in first-seen order of the sizes.
pub fn expanding_statistics(index: &GroupingIndex, config: &Config) -> Result<Vec<ExpandingSeries>> {
    index
        .groups()
        .iter()
        .map(|group| ExpandingSeries::new(group, config))
        .collect()
}
