//! Planning failure taxonomy.
//!
//! Only structural problems surface as errors. Missing cycle-time data
//! degrades to a zero-duration task and an unstaffable task degrades to
//! an empty operator list; both are reflected in the output shape, not
//! the error channel.

use thiserror::Error;

/// Errors a planning run can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A task references a part with no catalog entry. The whole batch
    /// is rejected — the output contract requires a display name per
    /// task, so there is no partial plan to return.
    #[error("unknown part '{part_id}': no entry in part catalog")]
    InvalidPart {
        /// The offending part identifier.
        part_id: String,
    },

    /// Input failed structural validation before planning.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PlanError {
    /// Shorthand for an [`PlanError::InvalidPart`] error.
    pub fn invalid_part(part_id: impl Into<String>) -> Self {
        Self::InvalidPart {
            part_id: part_id.into(),
        }
    }
}
