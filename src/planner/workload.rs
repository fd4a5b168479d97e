//! Workload estimation and task ranking.
//!
//! Turns raw task requests into `RankedTask`s with duration estimates,
//! then orders them by total minutes descending so the longest work is
//! staffed first.

use crate::error::PlanError;
use crate::models::{CycleTimeTable, PartCatalog, RankedTask, TaskRequest};

/// Enriches requests with duration estimates.
///
/// Per request, minutes-per-unit comes from the cycle-time table; a
/// missing entry is treated as 0.0 minutes per unit, not an error — the
/// task still ranks (last) and can still be staffed. An unknown part ID
/// rejects the whole batch with [`PlanError::InvalidPart`], since the
/// output contract needs a display name for every task.
pub fn estimate_workload(
    requests: &[TaskRequest],
    table: &CycleTimeTable,
    catalog: &PartCatalog,
) -> Result<Vec<RankedTask>, PlanError> {
    requests
        .iter()
        .map(|req| {
            let part = catalog
                .get(&req.part_id)
                .ok_or_else(|| PlanError::invalid_part(&req.part_id))?;
            let time_per_unit = table.lookup(&req.part_id, &req.work_area).unwrap_or(0.0);
            Ok(RankedTask {
                part_id: req.part_id.clone(),
                part_name: part.name.clone(),
                quantity: req.quantity,
                work_area: req.work_area.clone(),
                time_per_unit,
                total_minutes: time_per_unit * f64::from(req.quantity),
            })
        })
        .collect()
}

/// Sorts tasks by total minutes descending, in place.
///
/// The sort is stable and uses `f64::total_cmp`, so equal-duration tasks
/// keep their original relative order and the ordering is deterministic
/// for any input.
pub fn rank_tasks(tasks: &mut [RankedTask]) {
    tasks.sort_by(|a, b| b.total_minutes.total_cmp(&a.total_minutes));
}
