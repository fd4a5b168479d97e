//! Storage seams for attendance and material records.
//!
//! The planner itself is pure; these traits are the injected interfaces
//! the owning service wires in. In-memory implementations are provided
//! as the reference behavior (full-replace attendance writes, append-only
//! material log) and for tests.

mod attendance;
mod material;

pub use attendance::{
    AttendanceRecord, AttendanceStore, InMemoryAttendanceStore, Shift, ShiftKey,
};
pub use material::{InMemoryMaterialLog, MaterialLogSink};
