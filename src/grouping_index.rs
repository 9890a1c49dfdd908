use std::collections::HashMap;

use getset::{
    CopyGetters,
    Getters,
};
use tracing::debug;

use crate::types::{
    LatticeSize,
    Observation,
};

/// The thresholds of all observations sharing one lattice size, in table order.
///
/// A `Group` only comes into existence with its first observation, so it is never empty.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Group {
    /// The lattice size shared by all observations of this group.
    #[getset(get_copy = "pub")]
    size: LatticeSize,

    /// The thresholds in the order they appear in the observation table.
    #[getset(get = "pub")]
    thresholds: Vec<f64>,
}

impl Group {
    /// The number of observations in this group.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Always `false` for groups built by the `GroupingIndex`.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// A group without observations, which the `GroupingIndex` never builds.
    #[cfg(test)]
    pub(crate) fn empty(size: LatticeSize) -> Self {
        Self {
            size,
            thresholds: Vec::new(),
        }
    }
}

/// Partitions observations by lattice size.
/// Groups are kept in the order their size was first seen.
#[derive(Debug, Clone, Default)]
pub struct GroupingIndex {
    groups: Vec<Group>,
    positions: HashMap<LatticeSize, usize>,
}

impl GroupingIndex {
    /// Build the index over an ordered sequence of observations.
    /// An empty sequence yields an empty index.
    pub fn new(observations: &[Observation]) -> Self {
        let index = Self::from_iter(observations.iter().copied());
        debug!(
            "grouped {} observations into {} lattice sizes",
            observations.len(),
            index.groups.len()
        );
        index
    }

    fn insert(&mut self, obs: Observation) {
        let pos = *self.positions.entry(obs.size()).or_insert_with(|| {
            self.groups.push(Group {
                size: obs.size(),
                thresholds: Vec::new(),
            });
            self.groups.len() - 1
        });
        self.groups[pos].thresholds.push(obs.threshold());
    }

    /// The groups in first-seen order of their size.
    #[inline(always)]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Look up the group of a lattice size.
    pub fn get(&self, size: LatticeSize) -> Option<&Group> {
        self.positions.get(&size).map(|pos| &self.groups[*pos])
    }

    /// The lattice sizes in first-seen order.
    pub fn sizes(&self) -> impl Iterator<Item = LatticeSize> + '_ {
        self.groups.iter().map(|g| g.size)
    }

    /// The number of distinct lattice sizes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// `true` if no observation was indexed.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<Observation> for GroupingIndex {
    fn from_iter<T: IntoIterator<Item = Observation>>(iter: T) -> Self {
        let mut index = Self::default();
        for obs in iter {
            index.insert(obs);
        }
        index
    }
}
