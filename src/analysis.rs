use crate::{
    aligned_table::AlignedTable,
    config::Config,
    expanding::expanding_statistics,
    grouping_index::GroupingIndex,
    snapshot::{
        SnapshotStat,
        snapshot_statistics,
    },
    types::{
        Observation,
        Result,
    },
};

/// Group `observations` by lattice size and align their expanding statistics
/// into one table, ready for the convergence chart.
pub fn convergence_table(observations: &[Observation], config: &Config) -> Result<AlignedTable> {
    let index = GroupingIndex::new(observations);
    let series = expanding_statistics(&index, config)?;
    Ok(AlignedTable::new(&series))
}

/// Group `observations` by lattice size and reduce every group to its mean and std.
pub fn snapshot_table(observations: &[Observation], config: &Config) -> Result<Vec<SnapshotStat>> {
    snapshot_statistics(&GroupingIndex::new(observations), config)
}
