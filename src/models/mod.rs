//! Shift-planning domain models.
//!
//! Core data types for one planning run and its surrounding records:
//!
//! | Type | Role |
//! |------|------|
//! | `Worker`, `WorkerDirectory` | Who can work, and at what |
//! | `Part`, `PartCatalog`, `CycleTimeTable` | What is made, and how fast |
//! | `TaskRequest`, `RankedTask` | What a shift is asked to produce |
//! | `Assignment`, `OperatorPair`, `ShiftPlan` | Who does what |
//! | `MaterialLogEntry` | What was consumed |

mod material;
mod part;
mod plan;
mod task;
mod worker;

pub use material::MaterialLogEntry;
pub use part::{CycleTimeTable, Part, PartCatalog};
pub use plan::{Assignment, OperatorPair, ShiftPlan};
pub use task::{RankedTask, TaskRequest};
pub use worker::{normalize_label, Worker, WorkerDirectory};
