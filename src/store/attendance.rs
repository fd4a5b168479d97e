//! Attendance storage.
//!
//! Attendance is keyed by a structured `(date, shift)` composite key and
//! written wholesale: submitting marks for a key replaces whatever was
//! stored for that key before. There is no partial merge — a worker
//! absent from a re-submission is simply no longer marked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A shift label within a day (e.g. `"day"`, `"night"`, `"A"`).
///
/// Free-form, but trimmed so `"day "` and `"day"` key the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shift(String);

impl Shift {
    /// Creates a shift label (trimmed).
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().trim().to_string())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composite key identifying one attendance/planning period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftKey {
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// Shift label within that date.
    pub shift: Shift,
}

impl ShiftKey {
    /// Creates a key.
    pub fn new(date: NaiveDate, shift: impl AsRef<str>) -> Self {
        Self {
            date,
            shift: Shift::new(shift),
        }
    }
}

/// Presence marks for one shift key: worker ID → present.
///
/// A worker with no mark is treated as absent; only an explicit `true`
/// counts as present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    marks: HashMap<String, bool>,
}

impl AttendanceRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a worker's presence mark.
    pub fn mark(&mut self, worker_id: impl Into<String>, present: bool) {
        self.marks.insert(worker_id.into(), present);
    }

    /// Builder-style mark.
    pub fn with_mark(mut self, worker_id: impl Into<String>, present: bool) -> Self {
        self.mark(worker_id, present);
        self
    }

    /// Whether the worker is explicitly marked present.
    pub fn is_present(&self, worker_id: &str) -> bool {
        self.marks.get(worker_id).copied().unwrap_or(false)
    }

    /// Number of marks (present or absent) in the record.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the record holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

impl FromIterator<(String, bool)> for AttendanceRecord {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self {
            marks: iter.into_iter().collect(),
        }
    }
}

/// Storage seam for attendance records.
///
/// `set` replaces the record for a key in full. Implementations own
/// durability and write serialization; the planner only ever reads one
/// snapshot per run.
pub trait AttendanceStore {
    /// Returns the record for a key, if one was ever submitted.
    fn get(&self, key: &ShiftKey) -> Option<AttendanceRecord>;

    /// Stores a record for a key, replacing any prior record wholesale.
    fn set(&mut self, key: ShiftKey, record: AttendanceRecord);
}

/// In-memory attendance store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendanceStore {
    records: HashMap<ShiftKey, AttendanceRecord>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys with a stored record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn get(&self, key: &ShiftKey) -> Option<AttendanceRecord> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: ShiftKey, record: AttendanceRecord) {
        self.records.insert(key, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(day: u32, shift: &str) -> ShiftKey {
        ShiftKey::new(NaiveDate::from_ymd_opt(2026, 8, day).unwrap(), shift)
    }

    #[test]
    fn test_explicit_true_required() {
        let record = AttendanceRecord::new()
            .with_mark("W1", true)
            .with_mark("W2", false);

        assert!(record.is_present("W1"));
        assert!(!record.is_present("W2"));
        assert!(!record.is_present("W3")); // No mark = absent
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let mut store = InMemoryAttendanceStore::new();
        store.set(
            key(25, "day"),
            AttendanceRecord::new()
                .with_mark("W1", true)
                .with_mark("W2", true),
        );
        // Re-submission omits W2 and flips W1
        store.set(key(25, "day"), AttendanceRecord::new().with_mark("W1", false));

        let record = store.get(&key(25, "day")).unwrap();
        assert!(!record.is_present("W1"));
        assert!(!record.is_present("W2"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = InMemoryAttendanceStore::new();
        store.set(key(25, "day"), AttendanceRecord::new().with_mark("W1", true));
        store.set(key(25, "night"), AttendanceRecord::new().with_mark("W2", true));

        assert!(store.get(&key(25, "day")).unwrap().is_present("W1"));
        assert!(!store.get(&key(25, "night")).unwrap().is_present("W1"));
        assert!(store.get(&key(26, "day")).is_none());
    }

    #[test]
    fn test_shift_label_trimmed() {
        assert_eq!(key(25, " day "), key(25, "day"));
    }
}
