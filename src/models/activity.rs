//! Activity model.
//!
//! An activity is the schedulable unit of an RCPSP instance: a fixed
//! integer duration (single mode) plus a demand on each resource it uses
//! while executing. Milestone activities (duration 0) mark project
//! structure — the designated source and sink are milestones.
//!
//! # Reference
//! Kolisch & Hartmann (1999), "Heuristic Algorithms for Solving the RCPSP"

use serde::{Deserialize, Serialize};

/// An activity to be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: String,
    /// Processing duration in discrete periods (0 for milestones).
    pub duration: u32,
    /// Resource demands held for the full execution window.
    pub demands: Vec<ResourceDemand>,
}

/// A demand of one activity on one resource.
///
/// For renewable resources the quantity is occupied over the activity's
/// execution window; for non-renewable resources it is drawn once from the
/// project-wide pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDemand {
    /// Demanded resource identifier.
    pub resource_id: String,
    /// Units required.
    pub quantity: u32,
}

impl Activity {
    /// Creates a new activity with zero duration and no demands.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            duration: 0,
            demands: Vec::new(),
        }
    }

    /// Creates a zero-duration milestone (e.g. project source or sink).
    pub fn milestone(id: impl Into<String>) -> Self {
        Self::new(id)
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Adds a resource demand.
    pub fn with_demand(mut self, resource_id: impl Into<String>, quantity: u32) -> Self {
        self.demands.push(ResourceDemand {
            resource_id: resource_id.into(),
            quantity,
        });
        self
    }

    /// Units demanded of a given resource (0 if not demanded).
    pub fn demand_for(&self, resource_id: &str) -> u32 {
        self.demands
            .iter()
            .find(|d| d.resource_id == resource_id)
            .map(|d| d.quantity)
            .unwrap_or(0)
    }

    /// Whether this activity is a zero-duration milestone.
    pub fn is_milestone(&self) -> bool {
        self.duration == 0
    }
}
