#![doc = include_str!("../README.md")]

//! percolation-stats - grouped expanding statistics of percolation thresholds

mod aligned_table;
mod analysis;
mod config;
mod expanding;
mod grouping_index;
mod load_observations_from_csv;
mod render;
mod running_stat;
mod snapshot;
mod types;
mod write_tables;

pub use load_observations_from_csv::{
    load_observations_from_csv,
    read_observations,
};

/// Exports common types
pub mod prelude {
    pub use crate::{
        aligned_table::{
            AlignedTable,
            Frame,
        },
        analysis::{
            convergence_table,
            snapshot_table,
        },
        config::Config,
        expanding::{
            ExpandingPoint,
            ExpandingSeries,
            expanding_statistics,
        },
        grouping_index::{
            Group,
            GroupingIndex,
        },
        render::{
            RenderOptions,
            render_convergence,
            render_snapshot,
        },
        running_stat::RunningStat,
        snapshot::{
            SnapshotStat,
            snapshot_statistics,
        },
        types::*,
        write_tables::{
            write_aligned_table,
            write_frame,
            write_snapshot,
        },
    };
}
