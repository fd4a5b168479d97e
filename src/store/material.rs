//! Material-consumption log sink.
//!
//! Append-only: entries carry no identity and are never updated or
//! deduplicated. Durability beyond "eventually written" is the
//! implementation's concern.

use crate::models::MaterialLogEntry;

/// Storage seam for material-consumption records.
pub trait MaterialLogSink {
    /// Appends one entry to the log.
    fn append(&mut self, entry: MaterialLogEntry);
}

/// In-memory material log, mostly for tests and small deployments.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMaterialLog {
    entries: Vec<MaterialLogEntry>,
}

impl InMemoryMaterialLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All appended entries, in append order.
    pub fn entries(&self) -> &[MaterialLogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MaterialLogSink for InMemoryMaterialLog {
    fn append(&mut self, entry: MaterialLogEntry) {
        self.entries.push(entry);
    }
}
