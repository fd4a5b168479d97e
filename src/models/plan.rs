//! Plan output models.
//!
//! A `ShiftPlan` is the result of one assignment run: one `Assignment`
//! per ranked task (in rank order) plus the present-worker count.
//!
//! # Wire compatibility
//!
//! An absent support operator serializes as the literal string `"None"`,
//! matching the payload shape existing consumers already parse; it
//! deserializes back to `Option::None`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The operator pair assigned to one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorPair {
    /// Primary operator name (strongest qualified worker).
    #[serde(rename = "best_operator")]
    pub primary: String,
    /// Support operator name (weakest remaining qualified worker), if any.
    #[serde(
        rename = "support_operator",
        serialize_with = "ser_support",
        deserialize_with = "de_support"
    )]
    pub support: Option<String>,
}

impl OperatorPair {
    /// Creates a pair.
    pub fn new(primary: impl Into<String>, support: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            support,
        }
    }

    /// Support name for display, `"None"` when absent.
    pub fn support_label(&self) -> &str {
        self.support.as_deref().unwrap_or("None")
    }
}

fn ser_support<S: Serializer>(support: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(support.as_deref().unwrap_or("None"))
}

fn de_support<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.filter(|s| s != "None"))
}

/// One task's slot in the plan, with zero or one operator pairs.
///
/// An empty `operators` list means no present worker was trained for the
/// task's work area; the task stays in the plan so the caller sees what
/// went unstaffed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Part display name.
    pub part: String,
    /// Part identifier.
    pub part_id: String,
    /// Requested unit count.
    pub quantity: u32,
    /// Work-area label.
    pub work_area: String,
    /// Estimated total minutes for the task.
    pub total_minutes: f64,
    /// Assigned operators: empty, or exactly one pair.
    pub operators: Vec<OperatorPair>,
}

impl Assignment {
    /// Whether any operator was assigned.
    pub fn is_staffed(&self) -> bool {
        !self.operators.is_empty()
    }

    /// All worker names appearing in this assignment.
    pub fn operator_names(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().flat_map(|p| {
            std::iter::once(p.primary.as_str()).chain(p.support.as_deref())
        })
    }
}

/// The complete output of one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPlan {
    /// Assignments in ranked-task order.
    pub assignments: Vec<Assignment>,
    /// Number of workers present for the shift.
    pub present_count: usize,
}

impl ShiftPlan {
    /// Packages engine output and the present-worker count.
    pub fn new(assignments: Vec<Assignment>, present_count: usize) -> Self {
        Self {
            assignments,
            present_count,
        }
    }

    /// Number of assignments that received at least a primary operator.
    pub fn staffed_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_staffed()).count()
    }
}
