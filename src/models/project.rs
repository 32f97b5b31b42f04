//! Project (problem instance) model.
//!
//! A project bundles everything the decoder consumes: the activity list,
//! the resource catalog, the precedence graph given as successor
//! adjacency, a nominal horizon bound, and the designated source and sink
//! milestones. The instance is read-only during decoding; all mutable
//! scheduling state lives in the decoder.
//!
//! # Horizon
//! The horizon is a nominal upper bound on project duration used to size
//! time-indexed capacity arrays. It need not be exact — the decoder scans
//! up to twice the horizon before declaring infeasibility.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Activity, Resource};

/// An RCPSP instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Activities to schedule, including the source and sink milestones.
    pub activities: Vec<Activity>,
    /// Resource catalog.
    pub resources: Vec<Resource>,
    /// Precedence graph: activity → direct successors.
    pub successors: HashMap<String, Vec<String>>,
    /// Nominal upper bound on project duration.
    pub horizon: u32,
    /// Designated start milestone (no predecessors, duration 0).
    pub source: String,
    /// Designated end milestone (no successors, duration 0).
    pub sink: String,
}

impl Project {
    /// Creates an empty project with the given nominal horizon.
    pub fn new(horizon: u32) -> Self {
        Self {
            activities: Vec::new(),
            resources: Vec::new(),
            successors: HashMap::new(),
            horizon,
            source: String::new(),
            sink: String::new(),
        }
    }

    /// Adds an activity.
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Adds a resource to the catalog.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Adds a precedence constraint: `before` must finish before `after`
    /// starts.
    pub fn with_precedence(
        mut self,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        self.successors
            .entry(before.into())
            .or_default()
            .push(after.into());
        self
    }

    /// Sets the source milestone id.
    pub fn with_source(mut self, id: impl Into<String>) -> Self {
        self.source = id.into();
        self
    }

    /// Sets the sink milestone id.
    pub fn with_sink(mut self, id: impl Into<String>) -> Self {
        self.sink = id.into();
        self
    }

    /// Finds an activity by id.
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Finds a resource by id.
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Direct successors of an activity (empty if none).
    pub fn successors_of(&self, id: &str) -> &[String] {
        self.successors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of activities.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Longest single activity duration (0 for an empty project).
    pub fn max_duration(&self) -> u32 {
        self.activities.iter().map(|a| a.duration).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project::new(10)
            .with_activity(Activity::milestone("source"))
            .with_activity(Activity::new("A").with_duration(2).with_demand("R1", 1))
            .with_activity(Activity::new("B").with_duration(3).with_demand("R1", 1))
            .with_activity(Activity::milestone("sink"))
            .with_resource(Resource::renewable("R1", 1))
            .with_precedence("source", "A")
            .with_precedence("source", "B")
            .with_precedence("A", "sink")
            .with_precedence("B", "sink")
            .with_source("source")
            .with_sink("sink")
    }

    #[test]
    fn test_project_builder() {
        let p = sample_project();
        assert_eq!(p.activity_count(), 4);
        assert_eq!(p.resources.len(), 1);
        assert_eq!(p.horizon, 10);
        assert_eq!(p.source, "source");
        assert_eq!(p.sink, "sink");
    }

    #[test]
    fn test_lookups() {
        let p = sample_project();
        assert_eq!(p.activity("A").unwrap().duration, 2);
        assert!(p.activity("missing").is_none());
        assert!(p.resource("R1").unwrap().is_renewable());
        assert!(p.resource("R9").is_none());
    }

    #[test]
    fn test_successors_of() {
        let p = sample_project();
        assert_eq!(p.successors_of("source"), ["A", "B"]);
        assert_eq!(p.successors_of("A"), ["sink"]);
        assert!(p.successors_of("sink").is_empty());
        assert!(p.successors_of("missing").is_empty());
    }

    #[test]
    fn test_max_duration() {
        let p = sample_project();
        assert_eq!(p.max_duration(), 3);
        assert_eq!(Project::new(5).max_duration(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = sample_project();
        let json = serde_json::to_string(&p).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back.activity_count(), p.activity_count());
        assert_eq!(back.successors_of("source"), p.successors_of("source"));
        assert_eq!(back.horizon, p.horizon);
    }
}
