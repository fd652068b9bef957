use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Occurrence count of every byte value present in a buffer.
///
/// Only symbols with a non-zero count are stored, and iteration is always in
/// ascending symbol order so that anything derived from the table (the tree,
/// the container header) is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &b in data {
            counts[b as usize] += 1;
        }

        Self {
            counts: counts
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c > 0)
                .map(|(s, &c)| (s as u8, c))
                .collect(),
        }
    }

    /// Builds a table from already-validated `(symbol, count)` pairs.
    ///
    /// Zero counts are dropped.
    pub(crate) fn from_counts(pairs: impl IntoIterator<Item = (u8, u64)>) -> Self {
        Self {
            counts: pairs.into_iter().filter(|&(_, c)| c > 0).collect(),
        }
    }

    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, `None` on overflow.
    pub fn total(&self) -> Option<u64> {
        self.counts.values().try_fold(0u64, |acc, &c| acc.checked_add(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}
