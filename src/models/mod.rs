//! RCPSP domain models.
//!
//! Provides the core data types for stating a resource-constrained project
//! scheduling problem and representing its solutions. A problem instance is
//! a [`Project`]: activities with fixed integer durations and resource
//! demands, a resource catalog split into renewable and non-renewable
//! kinds, and a precedence graph given as successor adjacency. A solution
//! is a [`Schedule`]: one start/end window per activity.
//!
//! # Time Representation
//! All times are non-negative integers in abstract discrete periods. The
//! consumer defines what one period means (an hour, a shift, a day).

mod activity;
mod permutation;
mod project;
mod resource;
mod schedule;

pub use activity::{Activity, ResourceDemand};
pub use permutation::Permutation;
pub use project::Project;
pub use resource::{Capacity, Resource, ResourceKind};
pub use schedule::{Assignment, Schedule};
