//! Schedule (solution) model.
//!
//! A schedule assigns each activity a start/end window with
//! `end = start + duration`. Assignments are stored in the order they were
//! committed, which for the serial generation scheme is the decode order —
//! a deterministic function of the input permutation.

use serde::{Deserialize, Serialize};

/// A complete schedule: one time window per activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Activity windows in commit order.
    pub assignments: Vec<Assignment>,
}

/// An activity-to-time-window assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Scheduled activity id.
    pub activity_id: String,
    /// Start period (inclusive).
    pub start: u32,
    /// End period (exclusive); equals `start + duration`.
    pub end: u32,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(activity_id: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            activity_id: activity_id.into(),
            start,
            end,
        }
    }

    /// Window length (end - start).
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Finds the assignment for a given activity.
    pub fn assignment_for(&self, activity_id: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.activity_id == activity_id)
    }

    /// The (start, end) window for a given activity.
    pub fn window(&self, activity_id: &str) -> Option<(u32, u32)> {
        self.assignment_for(activity_id).map(|a| (a.start, a.end))
    }

    /// Start period of an activity.
    pub fn start_of(&self, activity_id: &str) -> Option<u32> {
        self.assignment_for(activity_id).map(|a| a.start)
    }

    /// End period of an activity.
    pub fn end_of(&self, activity_id: &str) -> Option<u32> {
        self.assignment_for(activity_id).map(|a| a.end)
    }

    /// Makespan: latest end across all assignments (0 when empty).
    pub fn makespan(&self) -> u32 {
        self.assignments.iter().map(|a| a.end).max().unwrap_or(0)
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
