//! Material-consumption log entry.
//!
//! Pure output records appended to an external log sink after a shift:
//! what was requested, what the plan required, and what was actually
//! consumed. Entries carry no identity and are never deduplicated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One material-consumption record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLogEntry {
    /// Production date.
    pub date: NaiveDate,
    /// Production program the consumption belongs to.
    pub program: String,
    /// Part identifier.
    pub part_id: String,
    /// Part display name.
    pub part_name: String,
    /// Requested quantity.
    pub qty: u32,
    /// Required material amount per the plan.
    pub required: f64,
    /// Actually consumed material amount.
    pub actual: f64,
    /// Supervisor who signed off the record.
    pub supervisor: String,
    /// Material efficiency for the run (required / actual context figure).
    pub efficiency: f64,
}

impl MaterialLogEntry {
    /// Creates an entry for a date, program, and part.
    pub fn new(
        date: NaiveDate,
        program: impl Into<String>,
        part_id: impl Into<String>,
        part_name: impl Into<String>,
    ) -> Self {
        Self {
            date,
            program: program.into(),
            part_id: part_id.into(),
            part_name: part_name.into(),
            qty: 0,
            required: 0.0,
            actual: 0.0,
            supervisor: String::new(),
            efficiency: 0.0,
        }
    }

    /// Sets the requested quantity.
    pub fn with_qty(mut self, qty: u32) -> Self {
        self.qty = qty;
        self
    }

    /// Sets required and actual material amounts.
    pub fn with_amounts(mut self, required: f64, actual: f64) -> Self {
        self.required = required;
        self.actual = actual;
        self
    }

    /// Sets the supervisor.
    pub fn with_supervisor(mut self, supervisor: impl Into<String>) -> Self {
        self.supervisor = supervisor.into();
        self
    }

    /// Sets the efficiency figure.
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }
}
