//! Shift production planning.
//!
//! Assigns present workers to production tasks for one shift: filter the
//! roster by attendance, estimate per-task workload from cycle times,
//! rank tasks longest-first, then greedily pair each task with a primary
//! operator (strongest qualifier) and a support operator (weakest
//! remaining qualifier). Each worker is used at most once per shift.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Worker`, `TaskRequest`, `RankedTask`,
//!   `Assignment`, `ShiftPlan`, `CycleTimeTable`, `MaterialLogEntry`
//! - **`planner`**: The pure pipeline — roster filter, workload
//!   estimator, task ranker, assignment engine, and the [`planner::assign`]
//!   entry point
//! - **`store`**: Injected storage seams — attendance (full-replace per
//!   shift key) and the append-only material log
//! - **`service`**: `PlanningService`, the operation surface a transport
//!   layer calls
//! - **`validation`**: Structural input checks
//!
//! # Example
//!
//! ```
//! use shiftplan::models::{CycleTimeTable, Part, PartCatalog, TaskRequest, Worker};
//! use shiftplan::planner::assign;
//!
//! let catalog = PartCatalog::new().with_part(Part::new("P1", "Bracket"));
//! let table = CycleTimeTable::new().with_entry("P1", "cut", 2.0);
//! let present = vec![
//!     Worker::new("W1").with_name("Asha").with_efficiency(9.0).with_skill("cut"),
//!     Worker::new("W2").with_name("Ben").with_efficiency(5.0).with_skill("cut"),
//! ];
//!
//! let plan = assign(&[TaskRequest::new("P1", 10, "cut")], &present, &table, &catalog).unwrap();
//! assert_eq!(plan.assignments[0].operators[0].primary, "Asha");
//! ```
//!
//! The assignment heuristic is a faithful single-pass greedy pairing —
//! it optimizes no global objective (see Pinedo (2016), "Scheduling",
//! Ch. 4 on priority dispatching for the family it belongs to).

pub mod error;
pub mod models;
pub mod planner;
pub mod service;
pub mod store;
pub mod validation;

pub use error::PlanError;
pub use models::{ShiftPlan, TaskRequest, Worker};
pub use planner::assign;
pub use service::PlanningService;
pub use store::{AttendanceRecord, ShiftKey};
