//! Greedy task–operator assignment engine.
//!
//! # Algorithm
//!
//! For each task in ranked order, over a pool of not-yet-assigned
//! present workers:
//!
//! 1. **Primary**: scan the pool in order; among workers trained for the
//!    task's work area, keep the one with the strictly highest
//!    efficiency. The strict `>` comparison means the earliest-scanned
//!    worker wins ties.
//! 2. Remove the primary from the pool, then select the **support** the
//!    same way but with a strict `<` comparison — the weakest remaining
//!    qualifier, pairing the strongest operator with the worker who most
//!    needs the backup/mentoring slot.
//! 3. Remove the support. A support is never assigned without a primary.
//!
//! Assignments are irrevocable: no backtracking, no re-evaluation of
//! earlier tasks. Each worker is used at most once per run, in either
//! role. The engine never fails — a task nobody qualifies for simply
//! gets an empty operator list and the pool carries to the next task.
//!
//! # Complexity
//! O(t * w) for t tasks and w present workers.

use crate::models::{Assignment, OperatorPair, RankedTask, Worker};

/// Assigns operators to ranked tasks, consuming workers from a pool.
///
/// `present` must already be in the order tie-breaks should respect
/// (the roster filter emits efficiency-descending order). Returns one
/// `Assignment` per task, in task order.
pub fn assign_operators(tasks: &[RankedTask], present: &[Worker]) -> Vec<Assignment> {
    let mut pool: Vec<Worker> = present.to_vec();

    tasks
        .iter()
        .map(|task| {
            let mut operators = Vec::new();

            let primary = select(&pool, task, |candidate, best| {
                candidate.efficiency > best.efficiency
            })
            .map(|idx| pool.remove(idx));

            if let Some(primary) = primary {
                let support = select(&pool, task, |candidate, best| {
                    candidate.efficiency < best.efficiency
                })
                .map(|idx| pool.remove(idx));

                operators.push(OperatorPair::new(
                    primary.name,
                    support.map(|w| w.name),
                ));
            }

            Assignment {
                part: task.part_name.clone(),
                part_id: task.part_id.clone(),
                quantity: task.quantity,
                work_area: task.work_area.clone(),
                total_minutes: task.total_minutes,
                operators,
            }
        })
        .collect()
}

/// Scans the pool for the best qualified worker under `better`.
///
/// Returns the index of the selected worker, or `None` when no pool
/// member is trained for the task's work area. `better` is strict in
/// both directions of use, so the first-scanned of any tied pair is
/// kept.
fn select(
    pool: &[Worker],
    task: &RankedTask,
    better: impl Fn(&Worker, &Worker) -> bool,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, worker) in pool.iter().enumerate() {
        if !worker.has_skill(&task.work_area) {
            continue;
        }
        match best {
            Some(b) if !better(worker, &pool[b]) => {}
            _ => best = Some(idx),
        }
    }
    best
}
