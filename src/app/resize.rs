//! Resize registrations, at most one per table.

use std::collections::HashMap;

use tabalign_domain::{ColumnConfigs, TableId};

/// Handle returned when a table is registered for resize re-runs.
///
/// Releasing a handle whose registration was already replaced does nothing.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct ResizeSubscription {
    table: TableId,
    token: u64,
}

impl ResizeSubscription {
    pub fn table(&self) -> TableId {
        self.table
    }
}

#[derive(Debug)]
struct Registration {
    token: u64,
    columns: ColumnConfigs,
}

#[derive(Debug, Default)]
pub struct ResizeRegistry {
    next_token: u64,
    entries: HashMap<TableId, Registration>,
}

impl ResizeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `table`, replacing any earlier registration for it.
    pub fn register(&mut self, table: TableId, columns: ColumnConfigs) -> ResizeSubscription {
        self.next_token += 1;
        let token = self.next_token;
        self.entries.insert(table, Registration { token, columns });
        ResizeSubscription { table, token }
    }

    pub fn release(&mut self, subscription: ResizeSubscription) -> bool {
        match self.entries.get(&subscription.table) {
            Some(entry) if entry.token == subscription.token => {
                self.entries.remove(&subscription.table);
                true
            }
            _ => false,
        }
    }

    pub fn unregister(&mut self, table: TableId) -> bool {
        self.entries.remove(&table).is_some()
    }

    pub fn columns(&self, table: TableId) -> Option<&ColumnConfigs> {
        self.entries.get(&table).map(|entry| &entry.columns)
    }

    pub fn is_registered(&self, table: TableId) -> bool {
        self.entries.contains_key(&table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
