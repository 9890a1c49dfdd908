use getset::CopyGetters;
use serde::Serialize;
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

/// Mean and standard deviation over a complete group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, CopyGetters)]
pub struct SnapshotStat {
    /// The lattice size of the group.
    #[getset(get_copy = "pub")]
    size: LatticeSize,

    /// The number of observations in the group.
    #[getset(get_copy = "pub")]
    count: u64,

    /// The mean threshold of the group.
    #[getset(get_copy = "pub")]
    mean: f64,

    /// The standard deviation of the thresholds of the group.
    #[getset(get_copy = "pub")]
    std: Cell,
}

impl SnapshotStat {
    /// Reduce a group in a single pass, keeping only the final accumulator.
    pub fn new(group: &Group, config: &Config) -> Result<Self> {
        let stat = RunningStat::from_iter(group.thresholds().iter().copied());
        let mean = stat
            .mean()
            .ok_or(Error::EmptyGroup { size: group.size() })?;
        let snapshot = Self {
            size: group.size(),
            count: stat.count(),
            mean,
            std: stat.std_dev(config.convention()),
        };
        trace!("snapshot: {snapshot:?}");
        Ok(snapshot)
    }
}

/// Compute the snapshot statistics of every group, in first-seen order of the sizes.
pub fn snapshot_statistics(index: &GroupingIndex, config: &Config) -> Result<Vec<SnapshotStat>> {
    index
        .groups()
        .iter()
        .map(|group| SnapshotStat::new(group, config))
        .collect()
}
