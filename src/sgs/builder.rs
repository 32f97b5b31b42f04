//! The serial generation scheme main loop.
//!
//! Activities move `Pending` → `Ready` → `Scheduled`: the selector yields
//! the next ready activity, its precedence bound is read from an
//! incrementally maintained floor, the profile is scanned forward for the
//! first resource-feasible start, and the placement is committed. The loop
//! is strictly sequential — every commit feeds the next iteration's
//! feasibility query.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::{PredecessorIndex, ReadySelector, ResourceProfile, SgsError};
use crate::models::{Assignment, Permutation, Project, Schedule};

/// Per-activity data the loop touches every iteration, resolved once up
/// front (resource ids become catalog positions, zero quantities drop out).
struct CompiledActivity {
    duration: u32,
    demands: Vec<(usize, u32)>,
}

/// Decodes permutations against one project and predecessor index.
#[derive(Debug)]
pub struct ScheduleBuilder<'a> {
    project: &'a Project,
    predecessors: &'a PredecessorIndex,
}

impl<'a> ScheduleBuilder<'a> {
    /// Creates a builder over a project and its predecessor index.
    pub fn new(project: &'a Project, predecessors: &'a PredecessorIndex) -> Self {
        Self {
            project,
            predecessors,
        }
    }

    /// Runs the serial generation scheme for one permutation.
    ///
    /// The permutation must contain every activity exactly once. On any
    /// failure the partially built schedule is discarded and a typed error
    /// is returned.
    pub fn build(&self, permutation: &Permutation) -> Result<Schedule, SgsError> {
        let n = self.project.activity_count();
        let index: HashMap<&str, usize> = self
            .project
            .activities
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.as_str(), i))
            .collect();

        self.check_coverage(permutation, &index)?;
        let compiled = self.compile()?;

        let mut profile = ResourceProfile::new(self.project);
        let mut schedule = Schedule::new();
        let mut scheduled: HashSet<&str> = HashSet::with_capacity(n);
        // Running precedence floor per activity, pushed forward whenever a
        // predecessor completes
        let mut earliest: Vec<u32> = vec![0; n];

        // The source anchors the schedule at (0, 0)
        if index.contains_key(self.project.source.as_str()) {
            schedule.add_assignment(Assignment::new(&self.project.source, 0, 0));
            scheduled.insert(self.project.source.as_str());
        }

        let selector = ReadySelector::new(permutation, self.predecessors);

        while scheduled.len() < n {
            let next = selector.next(&scheduled).ok_or_else(|| {
                SgsError::InvalidPermutation {
                    reason: "no activity is ready while some remain unscheduled".into(),
                }
            })?;
            let act = &compiled[index[next]];

            let start = if act.duration == 0 {
                // Milestones consume nothing and sit exactly on their
                // precedence bound
                earliest[index[next]]
            } else {
                self.earliest_feasible(&profile, act, earliest[index[next]], next)?
            };
            let end = start + act.duration;

            if act.duration > 0 {
                for &(resource, quantity) in &act.demands {
                    profile.commit(resource, quantity, start, act.duration);
                }
            }
            trace!(activity = next, start, end, "placed activity");

            schedule.add_assignment(Assignment::new(next, start, end));
            scheduled.insert(next);

            for successor in self.project.successors_of(next) {
                if let Some(&s) = index.get(successor.as_str()) {
                    if end > earliest[s] {
                        earliest[s] = end;
                    }
                }
            }
        }

        debug!(makespan = schedule.makespan(), "decode complete");
        Ok(schedule)
    }

    /// Scans forward from the precedence bound for the first period where
    /// every demand fits for the activity's full duration.
    fn earliest_feasible(
        &self,
        profile: &ResourceProfile,
        act: &CompiledActivity,
        bound: u32,
        id: &str,
    ) -> Result<u32, SgsError> {
        for t in bound..profile.scan_limit() {
            if act
                .demands
                .iter()
                .all(|&(resource, quantity)| profile.can_supply(resource, quantity, t, act.duration))
            {
                return Ok(t);
            }
        }
        Err(SgsError::Infeasible {
            activity: id.into(),
            scan_limit: profile.scan_limit(),
        })
    }

    /// Rejects permutations that omit an activity, contain a duplicate, or
    /// name an unknown one.
    fn check_coverage(
        &self,
        permutation: &Permutation,
        index: &HashMap<&str, usize>,
    ) -> Result<(), SgsError> {
        if permutation.len() != index.len() {
            return Err(SgsError::InvalidPermutation {
                reason: format!(
                    "permutation has {} entries for {} activities",
                    permutation.len(),
                    index.len()
                ),
            });
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(permutation.len());
        for id in permutation.iter() {
            if !index.contains_key(id) {
                return Err(SgsError::InvalidPermutation {
                    reason: format!("unknown activity '{id}'"),
                });
            }
            if !seen.insert(id) {
                return Err(SgsError::InvalidPermutation {
                    reason: format!("duplicate activity '{id}'"),
                });
            }
        }
        Ok(())
    }

    /// Resolves durations and demands once, so the loop never touches
    /// string ids. Demands on the same resource are summed; zero
    /// quantities drop out.
    fn compile(&self) -> Result<Vec<CompiledActivity>, SgsError> {
        let resource_index: HashMap<&str, usize> = self
            .project
            .resources
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.as_str(), i))
            .collect();

        self.project
            .activities
            .iter()
            .map(|a| {
                let mut demands: Vec<(usize, u32)> = Vec::with_capacity(a.demands.len());
                for d in &a.demands {
                    let resource = *resource_index.get(d.resource_id.as_str()).ok_or_else(|| {
                        SgsError::UnknownResource {
                            activity: a.id.clone(),
                            resource: d.resource_id.clone(),
                        }
                    })?;
                    if d.quantity == 0 {
                        continue;
                    }
                    match demands.iter_mut().find(|(r, _)| *r == resource) {
                        Some((_, q)) => *q += d.quantity,
                        None => demands.push((resource, d.quantity)),
                    }
                }
                Ok(CompiledActivity {
                    duration: a.duration,
                    demands,
                })
            })
            .collect()
    }
}
