//! The planning pipeline.
//!
//! Four stages, applied once per invocation, left to right:
//!
//! 1. **Roster filter** (`present_workers`) — join the worker directory
//!    with one shift's attendance record.
//! 2. **Workload estimator** (`estimate_workload`) — resolve part names
//!    and per-task total minutes from the cycle-time table.
//! 3. **Task ranker** (`rank_tasks`) — longest total duration first,
//!    stable on ties.
//! 4. **Assignment engine** (`assign_operators`) — greedy primary/support
//!    pairing over the present-worker pool.
//!
//! [`assign`] composes stages 2–4 over an already-filtered roster; the
//! service layer runs stage 1 against its attendance store first.
//!
//! The pipeline is pure: no I/O, no retained state, identical output for
//! identical input.

mod engine;
mod roster;
mod workload;

pub use engine::assign_operators;
pub use roster::present_workers;
pub use workload::{estimate_workload, rank_tasks};

use crate::error::PlanError;
use crate::models::{CycleTimeTable, PartCatalog, ShiftPlan, TaskRequest, Worker};

/// Plans one shift: estimates, ranks, and staffs `tasks` from the given
/// present-worker roster.
///
/// `present` defines pool order for tie-breaking; pass it as produced by
/// [`present_workers`] (efficiency descending). Fails only on a part ID
/// missing from `catalog`; missing cycle-time entries and unstaffable
/// tasks degrade into the output shape instead.
pub fn assign(
    tasks: &[TaskRequest],
    present: &[Worker],
    table: &CycleTimeTable,
    catalog: &PartCatalog,
) -> Result<ShiftPlan, PlanError> {
    let mut ranked = estimate_workload(tasks, table, catalog)?;
    rank_tasks(&mut ranked);
    let assignments = assign_operators(&ranked, present);
    Ok(ShiftPlan::new(assignments, present.len()))
}
