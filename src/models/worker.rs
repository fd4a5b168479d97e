//! Worker model.
//!
//! A worker is a human resource with an efficiency score and a set of
//! trained skills (work-area labels). Skill labels are normalized once
//! at ingestion — trimmed and lowercased — so the planner never has to
//! re-parse raw strings during qualification checks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalizes a skill or work-area label: trim surrounding whitespace,
/// lowercase. Comparison throughout the crate is exact match on
/// normalized labels.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// A worker available for task assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Productivity score (higher = more productive).
    pub efficiency: f64,
    /// Trained work-area labels, normalized at ingestion.
    pub skills: Vec<String>,
}

impl Worker {
    /// Creates a new worker with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            efficiency: 0.0,
            skills: Vec::new(),
        }
    }

    /// Sets the worker name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the efficiency score.
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    /// Adds a trained skill (normalized).
    pub fn with_skill(mut self, skill: impl AsRef<str>) -> Self {
        let label = normalize_label(skill.as_ref());
        if !label.is_empty() && !self.skills.contains(&label) {
            self.skills.push(label);
        }
        self
    }

    /// Adds trained skills from a comma-separated string, the format the
    /// upstream worker directory stores them in (e.g. `"cut, weld"`).
    /// Empty segments are dropped.
    pub fn with_skills_csv(mut self, skills: &str) -> Self {
        for part in skills.split(',') {
            self = self.with_skill(part);
        }
        self
    }

    /// Whether this worker is trained for the given work area.
    ///
    /// `area` must already be normalized (work areas are normalized at
    /// `TaskRequest` construction).
    pub fn has_skill(&self, area: &str) -> bool {
        self.skills.iter().any(|s| s == area)
    }
}

/// The worker directory: all known workers, insertion-ordered.
///
/// Order is significant — the roster filter and the assignment engine's
/// tie-breaking both derive from directory order for workers of equal
/// efficiency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerDirectory {
    workers: Vec<Worker>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl WorkerDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a worker. A worker with an existing ID replaces the prior
    /// entry in place, keeping its position.
    pub fn insert(&mut self, worker: Worker) {
        match self.index.get(&worker.id) {
            Some(&pos) => self.workers[pos] = worker,
            None => {
                self.index.insert(worker.id.clone(), self.workers.len());
                self.workers.push(worker);
            }
        }
    }

    /// Builder-style insertion.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.insert(worker);
        self
    }

    /// Looks up a worker by ID.
    pub fn get(&self, id: &str) -> Option<&Worker> {
        self.index.get(id).map(|&pos| &self.workers[pos])
    }

    /// Iterates workers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    /// Number of workers in the directory.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Rebuilds the ID index; needed after deserialization, which skips
    /// the index field.
    pub fn reindex(&mut self) {
        self.index = self
            .workers
            .iter()
            .enumerate()
            .map(|(pos, w)| (w.id.clone(), pos))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new("W1")
            .with_name("Asha")
            .with_efficiency(8.5)
            .with_skill("Cut")
            .with_skill("weld ");

        assert_eq!(w.id, "W1");
        assert_eq!(w.name, "Asha");
        assert!((w.efficiency - 8.5).abs() < 1e-10);
        assert_eq!(w.skills, vec!["cut", "weld"]);
    }

    #[test]
    fn test_skill_normalization() {
        let w = Worker::new("W1").with_skills_csv(" Cut ,WELD, , paint");
        assert!(w.has_skill("cut"));
        assert!(w.has_skill("weld"));
        assert!(w.has_skill("paint"));
        assert!(!w.has_skill("mill"));
        // Empty segment dropped
        assert_eq!(w.skills.len(), 3);
    }

    #[test]
    fn test_duplicate_skill_kept_once() {
        let w = Worker::new("W1").with_skills_csv("cut, Cut, CUT");
        assert_eq!(w.skills, vec!["cut"]);
    }

    #[test]
    fn test_directory_insertion_order() {
        let dir = WorkerDirectory::new()
            .with_worker(Worker::new("B"))
            .with_worker(Worker::new("A"))
            .with_worker(Worker::new("C"));

        let ids: Vec<&str> = dir.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn test_directory_replace_keeps_position() {
        let mut dir = WorkerDirectory::new()
            .with_worker(Worker::new("A").with_name("old"))
            .with_worker(Worker::new("B"));
        dir.insert(Worker::new("A").with_name("new"));

        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get("A").unwrap().name, "new");
        assert_eq!(dir.iter().next().unwrap().id, "A");
    }

    #[test]
    fn test_directory_reindex_after_deserialize() {
        let dir = WorkerDirectory::new().with_worker(Worker::new("W1").with_name("Asha"));
        let json = serde_json::to_string(&dir).unwrap();
        let mut restored: WorkerDirectory = serde_json::from_str(&json).unwrap();
        restored.reindex();
        assert_eq!(restored.get("W1").unwrap().name, "Asha");
    }
}
