//! Resource model.
//!
//! Resources constrain when activities can run. A renewable resource
//! (workers, machines) replenishes every period: consumption applies only
//! during an activity's execution window. A non-renewable resource (a
//! material budget) is a fixed project-wide pool drawn down once per
//! activity, regardless of when the activity runs.
//!
//! # Reference
//! Kolisch & Hartmann (1999), "Heuristic Algorithms for Solving the RCPSP"

use serde::{Deserialize, Serialize};

/// A capacity-constrained resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Renewable or non-renewable semantics.
    pub kind: ResourceKind,
    /// Available units, constant or per period.
    pub capacity: Capacity,
}

/// Resource replenishment semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Capacity replenishes each period.
    Renewable,
    /// A fixed total budget for the whole project.
    NonRenewable,
}

/// Available units of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capacity {
    /// The same number of units in every period.
    Constant(u32),
    /// Units per period, indexed from t = 0. Must cover at least
    /// `horizon + 1` periods; past its end the final value repeats.
    Profile(Vec<u32>),
}

impl Resource {
    /// Creates a renewable resource with constant capacity.
    pub fn renewable(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            kind: ResourceKind::Renewable,
            capacity: Capacity::Constant(capacity),
        }
    }

    /// Creates a non-renewable resource with a total budget.
    pub fn non_renewable(id: impl Into<String>, budget: u32) -> Self {
        Self {
            id: id.into(),
            kind: ResourceKind::NonRenewable,
            capacity: Capacity::Constant(budget),
        }
    }

    /// Replaces the capacity with a time-indexed profile.
    pub fn with_profile(mut self, profile: Vec<u32>) -> Self {
        self.capacity = Capacity::Profile(profile);
        self
    }

    /// Whether this resource is renewable.
    pub fn is_renewable(&self) -> bool {
        self.kind == ResourceKind::Renewable
    }
}

impl Capacity {
    /// Available units at period `t`.
    ///
    /// A profile repeats its final value past its end; an empty profile
    /// has no capacity.
    pub fn at(&self, t: usize) -> u32 {
        match self {
            Capacity::Constant(c) => *c,
            Capacity::Profile(p) => match p.get(t) {
                Some(&c) => c,
                None => p.last().copied().unwrap_or(0),
            },
        }
    }

    /// The project-wide budget reading (value at t = 0).
    ///
    /// Meaningful for non-renewable resources, whose capacity does not
    /// vary over time.
    pub fn total(&self) -> u32 {
        self.at(0)
    }
}
