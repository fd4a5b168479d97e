//! Planning service: the operation surface a transport layer calls.
//!
//! Owns the reference data (worker directory, part catalog, cycle-time
//! table) and the injected stores, and exposes the three operations the
//! surrounding application needs: submit attendance, log material
//! consumption, and plan a shift. Transport, routing, and serialization
//! live outside this crate.
//!
//! Writes to the stores are serialized by `&mut self`; callers running
//! concurrent submissions for the same shift key must arrange their own
//! ordering (last write wins).

use tracing::{debug, info};

use crate::error::PlanError;
use crate::models::{
    CycleTimeTable, MaterialLogEntry, PartCatalog, ShiftPlan, TaskRequest, WorkerDirectory,
};
use crate::planner::{assign, present_workers};
use crate::store::{AttendanceRecord, AttendanceStore, MaterialLogSink, ShiftKey};
use crate::validation::validate_input;

/// The planning service.
///
/// Generic over its storage seams so tests and deployments can supply
/// their own backends; [`crate::store::InMemoryAttendanceStore`] and
/// [`crate::store::InMemoryMaterialLog`] are the reference
/// implementations.
#[derive(Debug)]
pub struct PlanningService<A, M> {
    directory: WorkerDirectory,
    catalog: PartCatalog,
    cycle_times: CycleTimeTable,
    attendance: A,
    material_log: M,
}

impl<A: AttendanceStore, M: MaterialLogSink> PlanningService<A, M> {
    /// Creates a service over the given reference data and stores.
    pub fn new(
        directory: WorkerDirectory,
        catalog: PartCatalog,
        cycle_times: CycleTimeTable,
        attendance: A,
        material_log: M,
    ) -> Self {
        Self {
            directory,
            catalog,
            cycle_times,
            attendance,
            material_log,
        }
    }

    /// Submits attendance for a shift, replacing any prior record for
    /// that key in full. Returns the stored record.
    pub fn mark_attendance(&mut self, key: ShiftKey, record: AttendanceRecord) -> AttendanceRecord {
        info!(date = %key.date, shift = %key.shift, marks = record.len(), "attendance submitted");
        self.attendance.set(key, record.clone());
        record
    }

    /// Appends material-consumption entries to the log. Returns the
    /// number of entries appended.
    pub fn save_material(&mut self, entries: Vec<MaterialLogEntry>) -> usize {
        let count = entries.len();
        for entry in entries {
            self.material_log.append(entry);
        }
        info!(count, "material entries logged");
        count
    }

    /// Plans one shift: roster filter over the stored attendance, then
    /// the estimate → rank → assign pipeline.
    ///
    /// A shift with no attendance record planned over a non-empty task
    /// list yields a plan with zero present workers and all-unstaffed
    /// tasks, not an error.
    pub fn plan_production(
        &self,
        key: &ShiftKey,
        requests: &[TaskRequest],
    ) -> Result<ShiftPlan, PlanError> {
        let record = self.attendance.get(key);
        let present = present_workers(&self.directory, record.as_ref());
        debug!(
            date = %key.date,
            shift = %key.shift,
            present = present.len(),
            tasks = requests.len(),
            "planning shift"
        );

        validate_input(&present, requests).map_err(|errors| {
            let joined = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PlanError::InvalidInput(joined)
        })?;

        let plan = assign(requests, &present, &self.cycle_times, &self.catalog)?;
        info!(
            assignments = plan.assignments.len(),
            staffed = plan.staffed_count(),
            present = plan.present_count,
            "shift planned"
        );
        Ok(plan)
    }

    /// Read access to the worker directory.
    pub fn directory(&self) -> &WorkerDirectory {
        &self.directory
    }

    /// Read access to the material log sink.
    pub fn material_log(&self) -> &M {
        &self.material_log
    }

    /// Read access to the attendance store.
    pub fn attendance(&self) -> &A {
        &self.attendance
    }
}
