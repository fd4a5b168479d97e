//! Input validation for planning runs.
//!
//! Checks structural integrity of workers and task requests before
//! planning. Detects:
//! - Duplicate worker IDs
//! - Empty or non-finite efficiency values
//! - Workers with no usable skill labels
//! - Requests with an empty work area or zero quantity
//!
//! All problems are collected and returned together rather than failing
//! on the first one.

use crate::models::{TaskRequest, Worker};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workers share the same ID.
    DuplicateWorkerId,
    /// A worker's efficiency is NaN, infinite, or negative.
    InvalidEfficiency,
    /// A worker has no skill labels after normalization.
    NoSkills,
    /// A request's work area is empty after normalization.
    EmptyWorkArea,
    /// A request asks for zero units.
    ZeroQuantity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates workers and task requests for a planning run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(workers: &[Worker], requests: &[TaskRequest]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for w in workers {
        if !ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateWorkerId,
                format!("Duplicate worker ID: {}", w.id),
            ));
        }
        if !w.efficiency.is_finite() || w.efficiency < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEfficiency,
                format!("Worker '{}' has invalid efficiency {}", w.id, w.efficiency),
            ));
        }
        if w.skills.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoSkills,
                format!("Worker '{}' has no trained skills", w.id),
            ));
        }
    }

    for (i, req) in requests.iter().enumerate() {
        if req.work_area.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyWorkArea,
                format!("Request #{i} (part '{}') has an empty work area", req.part_id),
            ));
        }
        if req.quantity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroQuantity,
                format!("Request #{i} (part '{}') asks for zero units", req.part_id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(id: &str, eff: f64, skills: &str) -> Worker {
        Worker::new(id).with_efficiency(eff).with_skills_csv(skills)
    }

    #[test]
    fn test_valid_input() {
        let workers = vec![worker("W1", 8.0, "cut"), worker("W2", 5.0, "weld")];
        let requests = vec![TaskRequest::new("P1", 3, "cut")];
        assert!(validate_input(&workers, &requests).is_ok());
    }

    #[test]
    fn test_duplicate_worker_id() {
        let workers = vec![worker("W1", 8.0, "cut"), worker("W1", 5.0, "weld")];
        let errors = validate_input(&workers, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateWorkerId));
    }

    #[test]
    fn test_invalid_efficiency() {
        let workers = vec![
            worker("W1", f64::NAN, "cut"),
            worker("W2", -1.0, "cut"),
        ];
        let errors = validate_input(&workers, &[]).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidEfficiency)
                .count(),
            2
        );
    }

    #[test]
    fn test_no_skills() {
        // Only whitespace and commas — everything normalizes away
        let workers = vec![worker("W1", 5.0, " , , ")];
        let errors = validate_input(&workers, &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::NoSkills));
    }

    #[test]
    fn test_bad_requests() {
        let requests = vec![
            TaskRequest::new("P1", 0, "cut"),
            TaskRequest::new("P2", 5, "   "),
        ];
        let errors = validate_input(&[], &requests).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroQuantity));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyWorkArea));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let workers = vec![worker("W1", f64::INFINITY, "")];
        let requests = vec![TaskRequest::new("P1", 0, "cut")];
        let errors = validate_input(&workers, &requests).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
