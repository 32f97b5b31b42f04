//! Serial generation scheme (SGS).
//!
//! Decodes a priority permutation into a resource-feasible schedule: walk
//! the permutation, pick the first activity whose predecessors are all
//! placed, and start it at the earliest period where every demanded
//! resource can cover it for its whole duration. The permutation carries
//! the search's intent; this module guarantees the result is feasible or
//! a typed error — never a hang, never a partial schedule.
//!
//! # Usage
//!
//! ```
//! use rcpsp_sgs::models::{Activity, Permutation, Project, Resource};
//! use rcpsp_sgs::sgs::SerialGenerator;
//!
//! let project = Project::new(8)
//!     .with_activity(Activity::milestone("source"))
//!     .with_activity(Activity::new("A").with_duration(2).with_demand("R1", 1))
//!     .with_activity(Activity::milestone("sink"))
//!     .with_resource(Resource::renewable("R1", 1))
//!     .with_precedence("source", "A")
//!     .with_precedence("A", "sink")
//!     .with_source("source")
//!     .with_sink("sink");
//!
//! let generator = SerialGenerator::new(&project);
//! let permutation: Permutation = ["source", "A", "sink"].into_iter().collect();
//! let schedule = generator.decode(&permutation).unwrap();
//! assert_eq!(schedule.makespan(), 2);
//! ```
//!
//! # Isolation
//!
//! The predecessor index is derived once and shared read-only; every
//! [`decode`](SerialGenerator::decode) call constructs and exclusively
//! owns a fresh [`ResourceProfile`], so an outer search may evaluate
//! independent permutations from parallel threads against one generator.
//!
//! # Reference
//! Kolisch (1996), "Serial and parallel resource-constrained project
//! scheduling methods revisited"

mod builder;
mod precedence;
mod profile;
mod selector;

pub use builder::ScheduleBuilder;
pub use precedence::PredecessorIndex;
pub use profile::ResourceProfile;
pub use selector::ReadySelector;

use thiserror::Error;

use crate::models::{Permutation, Project, Schedule};

/// Decoding failures.
///
/// The decoder fails fast: no retries, no partial schedules. What to do
/// with an undecodable permutation (penalize, repair, discard) is the
/// outer search's policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SgsError {
    /// The permutation omits an activity, repeats one, or can never make
    /// another activity ready (precedence cycle or corrupted data).
    #[error("invalid permutation: {reason}")]
    InvalidPermutation {
        /// What exactly was wrong.
        reason: String,
    },
    /// An activity demands a resource absent from the catalog.
    #[error("activity '{activity}' demands unknown resource '{resource}'")]
    UnknownResource {
        /// Demanding activity.
        activity: String,
        /// The missing resource id.
        resource: String,
    },
    /// The forward scan exhausted its bounded window without a feasible
    /// start — the horizon is far too small, or a demand exceeds what a
    /// resource can ever supply.
    #[error("no feasible start for activity '{activity}' within {scan_limit} periods")]
    Infeasible {
        /// The activity that could not be placed.
        activity: String,
        /// Exclusive upper bound of the scanned start periods.
        scan_limit: u32,
    },
}

/// Reusable decoder for one project.
///
/// Holds the project reference and the derived predecessor index; decoding
/// borrows `self` immutably, so one generator serves many permutations —
/// sequentially or in parallel.
#[derive(Debug)]
pub struct SerialGenerator<'a> {
    project: &'a Project,
    predecessors: PredecessorIndex,
}

impl<'a> SerialGenerator<'a> {
    /// Creates a generator, deriving the predecessor index from the
    /// project's successor adjacency.
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            predecessors: PredecessorIndex::from_project(project),
        }
    }

    /// Creates a generator around a predecessor index the caller already
    /// computed.
    pub fn with_predecessors(project: &'a Project, predecessors: PredecessorIndex) -> Self {
        Self {
            project,
            predecessors,
        }
    }

    /// Decodes one permutation into a schedule.
    pub fn decode(&self, permutation: &Permutation) -> Result<Schedule, SgsError> {
        ScheduleBuilder::new(self.project, &self.predecessors).build(permutation)
    }
}

/// One-shot decode: derives the predecessor index, decodes, and discards
/// the intermediate state.
pub fn decode(project: &Project, permutation: &Permutation) -> Result<Schedule, SgsError> {
    SerialGenerator::new(project).decode(permutation)
}
