//! Part metadata and cycle-time lookup.
//!
//! `PartCatalog` maps part IDs to display metadata; an unknown part is a
//! hard error at planning time because the output contract needs a part
//! name. `CycleTimeTable` maps (part, work area) to minutes-per-unit; an
//! absent entry is NOT an error — callers treat it as zero minutes per
//! unit, so the task still ranks and gets assigned.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::worker::normalize_label;

/// Static metadata for a producible part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Unique part identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Part {
    /// Creates a part.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Lookup from part ID to part metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartCatalog {
    parts: HashMap<String, Part>,
}

impl PartCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a part.
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.insert(part.id.clone(), part);
        self
    }

    /// Looks up a part by ID.
    pub fn get(&self, part_id: &str) -> Option<&Part> {
        self.parts.get(part_id)
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Per-part, per-work-area cycle times (minutes per unit).
///
/// Work-area labels are normalized on both write and read so entries
/// loaded from external data match normalized `TaskRequest` areas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleTimeTable {
    entries: HashMap<String, HashMap<String, f64>>,
}

impl CycleTimeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minutes-per-unit for a (part, work area) pair.
    pub fn set(&mut self, part_id: impl Into<String>, area: &str, minutes_per_unit: f64) {
        self.entries
            .entry(part_id.into())
            .or_default()
            .insert(normalize_label(area), minutes_per_unit);
    }

    /// Builder-style entry insertion.
    pub fn with_entry(mut self, part_id: impl Into<String>, area: &str, minutes: f64) -> Self {
        self.set(part_id, area, minutes);
        self
    }

    /// Looks up minutes-per-unit for a (part, work area) pair.
    ///
    /// Returns `None` when no entry exists; the workload estimator maps
    /// that to 0.0 rather than failing.
    pub fn lookup(&self, part_id: &str, area: &str) -> Option<f64> {
        self.entries
            .get(part_id)?
            .get(&normalize_label(area))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = PartCatalog::new()
            .with_part(Part::new("P1", "Bracket"))
            .with_part(Part::new("P2", "Housing"));

        assert_eq!(catalog.get("P1").unwrap().name, "Bracket");
        assert!(catalog.get("P9").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_cycle_time_lookup() {
        let table = CycleTimeTable::new()
            .with_entry("P1", "cut", 2.0)
            .with_entry("P1", "weld", 3.5);

        assert_eq!(table.lookup("P1", "cut"), Some(2.0));
        assert_eq!(table.lookup("P1", "weld"), Some(3.5));
        assert_eq!(table.lookup("P1", "paint"), None);
        assert_eq!(table.lookup("P2", "cut"), None);
    }

    #[test]
    fn test_cycle_time_area_normalization() {
        let table = CycleTimeTable::new().with_entry("P1", " Cut ", 2.0);
        assert_eq!(table.lookup("P1", "cut"), Some(2.0));
        assert_eq!(table.lookup("P1", "CUT"), Some(2.0));
    }
}
