//! Roster filter.
//!
//! Joins the worker directory with one shift's attendance record to
//! produce the present-worker list the assignment engine draws from.

use crate::models::{Worker, WorkerDirectory};
use crate::store::AttendanceRecord;

/// Returns the workers explicitly marked present, sorted by efficiency
/// descending.
///
/// The sort is stable, so workers of equal efficiency keep directory
/// order — this ordering is what the engine's first-seen tie-break
/// operates on. A missing record (`None`) yields an empty roster; an
/// attendance mark for an ID the directory doesn't know is ignored.
pub fn present_workers(
    directory: &WorkerDirectory,
    record: Option<&AttendanceRecord>,
) -> Vec<Worker> {
    let Some(record) = record else {
        return Vec::new();
    };

    let mut present: Vec<Worker> = directory
        .iter()
        .filter(|w| record.is_present(&w.id))
        .cloned()
        .collect();
    present.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    present
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> WorkerDirectory {
        WorkerDirectory::new()
            .with_worker(Worker::new("W1").with_name("Asha").with_efficiency(5.0))
            .with_worker(Worker::new("W2").with_name("Ben").with_efficiency(9.0))
            .with_worker(Worker::new("W3").with_name("Cal").with_efficiency(7.0))
    }

    #[test]
    fn test_only_explicit_true_included() {
        let record = AttendanceRecord::new()
            .with_mark("W1", true)
            .with_mark("W2", false);
        // W3 has no mark at all
        let present = present_workers(&directory(), Some(&record));

        assert_eq!(present.len(), 1);
        assert_eq!(present[0].id, "W1");
    }

    #[test]
    fn test_sorted_by_efficiency_descending() {
        let record = AttendanceRecord::new()
            .with_mark("W1", true)
            .with_mark("W2", true)
            .with_mark("W3", true);
        let present = present_workers(&directory(), Some(&record));

        let ids: Vec<&str> = present.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["W2", "W3", "W1"]);
    }

    #[test]
    fn test_equal_efficiency_keeps_directory_order() {
        let dir = WorkerDirectory::new()
            .with_worker(Worker::new("A").with_efficiency(5.0))
            .with_worker(Worker::new("B").with_efficiency(5.0))
            .with_worker(Worker::new("C").with_efficiency(5.0));
        let record = AttendanceRecord::new()
            .with_mark("A", true)
            .with_mark("B", true)
            .with_mark("C", true);

        let ids: Vec<String> = present_workers(&dir, Some(&record))
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_missing_record_is_empty_roster() {
        assert!(present_workers(&directory(), None).is_empty());
    }

    #[test]
    fn test_unknown_mark_ignored() {
        let record = AttendanceRecord::new().with_mark("GHOST", true);
        assert!(present_workers(&directory(), Some(&record)).is_empty());
    }
}
