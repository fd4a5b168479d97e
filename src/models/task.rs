//! Task request and ranked task models.
//!
//! A `TaskRequest` is one line of a production plan request: a part, a
//! quantity, and the work area that will produce it. The workload
//! estimator enriches requests into `RankedTask`s carrying the duration
//! figures the assignment engine orders by.

use serde::{Deserialize, Serialize};

use super::worker::normalize_label;

/// A single production request: make `quantity` units of `part_id` in
/// `work_area`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Part identifier (must exist in the part catalog).
    pub part_id: String,
    /// Requested unit count.
    pub quantity: u32,
    /// Work-area label, normalized at construction.
    pub work_area: String,
}

impl TaskRequest {
    /// Creates a request. The work area is normalized (trim + lowercase)
    /// so the engine's skill match is exact.
    pub fn new(part_id: impl Into<String>, quantity: u32, work_area: &str) -> Self {
        Self {
            part_id: part_id.into(),
            quantity,
            work_area: normalize_label(work_area),
        }
    }
}

/// A task request enriched with duration estimates, ready for ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedTask {
    /// Part identifier.
    pub part_id: String,
    /// Part display name, resolved from the catalog.
    pub part_name: String,
    /// Requested unit count.
    pub quantity: u32,
    /// Normalized work-area label.
    pub work_area: String,
    /// Minutes per unit from the cycle-time table (0.0 when no entry).
    pub time_per_unit: f64,
    /// `time_per_unit * quantity` — the ranking key.
    pub total_minutes: f64,
}
