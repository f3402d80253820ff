use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::align::AlignMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    #[serde(default)]
    pub align: AlignMode,
}

impl ColumnConfig {
    pub fn new(align: AlignMode) -> Self {
        Self { align }
    }
}

/// Per-column settings keyed by column index; absent columns use defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfigs {
    entries: BTreeMap<usize, ColumnConfig>,
}

impl ColumnConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, index: usize, config: ColumnConfig) -> Self {
        self.entries.insert(index, config);
        self
    }

    pub fn get(&self, index: usize) -> ColumnConfig {
        self.entries.get(&index).copied().unwrap_or_default()
    }

    pub fn set_align(&mut self, index: usize, align: AlignMode) {
        self.entries.entry(index).or_default().align = align;
    }

    /// Entries of `other` replace entries of `self` with the same index.
    pub fn merge(&mut self, other: &ColumnConfigs) {
        for (index, config) in &other.entries {
            self.entries.insert(*index, *config);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(usize, ColumnConfig)> for ColumnConfigs {
    fn from_iter<I: IntoIterator<Item = (usize, ColumnConfig)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
