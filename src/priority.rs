//! Priority-rule and random permutation construction.
//!
//! Builds the priority lists the decoder consumes. A rule scores every
//! activity (lower score = earlier in the list); sorting is stable, so
//! ties keep the project's activity order and the resulting permutation is
//! deterministic. Random permutations take a caller-supplied `Rng`, so a
//! seeded generator reproduces its samples exactly.
//!
//! The search loop that mutates and re-evaluates permutations lives
//! outside this crate; these constructors only provide starting points.
//!
//! # Score Convention
//! **Lower score = higher priority.** Rules return smaller values for
//! activities that should appear earlier in the permutation.
//!
//! # References
//! - Kolisch (1996), "Efficient priority rules for the RCPSP"
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::fmt::Debug;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Activity, Permutation, Project};

/// A rule assigning each activity a priority score.
pub trait PriorityRule: Debug {
    /// Rule name (e.g. "SPT", "MTS").
    fn name(&self) -> &'static str;

    /// Scores an activity; lower = earlier in the permutation.
    fn score(&self, activity: &Activity, project: &Project) -> f64;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Shortest Processing Time: short activities first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestDuration;

impl PriorityRule for ShortestDuration {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn score(&self, activity: &Activity, _project: &Project) -> f64 {
        activity.duration as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Longest Processing Time: long activities first.
#[derive(Debug, Clone, Copy)]
pub struct LongestDuration;

impl PriorityRule for LongestDuration {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn score(&self, activity: &Activity, _project: &Project) -> f64 {
        -(activity.duration as f64)
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

/// Most Successors: activities unlocking more of the graph first.
///
/// # Reference
/// Kolisch (1996) — MTS performs well among static rules for the serial
/// scheme.
#[derive(Debug, Clone, Copy)]
pub struct MostSuccessors;

impl PriorityRule for MostSuccessors {
    fn name(&self) -> &'static str {
        "MTS"
    }

    fn score(&self, activity: &Activity, project: &Project) -> f64 {
        -(project.successors_of(&activity.id).len() as f64)
    }

    fn description(&self) -> &'static str {
        "Most Successors"
    }
}

/// Builds a permutation by scoring every activity and stable-sorting.
///
/// Ties keep the project's activity order, so the result is a
/// deterministic function of `(project, rule)`.
pub fn permutation_from_rule(project: &Project, rule: &dyn PriorityRule) -> Permutation {
    let mut scored: Vec<(f64, &str)> = project
        .activities
        .iter()
        .map(|a| (rule.score(a, project), a.id.as_str()))
        .collect();
    scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    scored.into_iter().map(|(_, id)| id).collect()
}

/// Uniformly samples a permutation of all activity ids.
pub fn random_permutation<R: Rng>(project: &Project, rng: &mut R) -> Permutation {
    let mut ids: Vec<String> = project.activities.iter().map(|a| a.id.clone()).collect();
    ids.shuffle(rng);
    Permutation::new(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resource;
    use crate::sgs;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_project() -> Project {
        Project::new(12)
            .with_activity(Activity::milestone("source"))
            .with_activity(Activity::new("A").with_duration(5).with_demand("R1", 1))
            .with_activity(Activity::new("B").with_duration(1).with_demand("R1", 1))
            .with_activity(Activity::new("C").with_duration(3).with_demand("R1", 1))
            .with_activity(Activity::milestone("sink"))
            .with_resource(Resource::renewable("R1", 2))
            .with_precedence("source", "A")
            .with_precedence("source", "B")
            .with_precedence("source", "C")
            .with_precedence("A", "sink")
            .with_precedence("B", "sink")
            .with_precedence("C", "sink")
            .with_source("source")
            .with_sink("sink")
    }

    #[test]
    fn test_shortest_duration_order() {
        let p = sample_project();
        let perm = permutation_from_rule(&p, &ShortestDuration);
        let order: Vec<_> = perm.iter().collect();
        // Milestones (duration 0) first in input order, then B, C, A
        assert_eq!(order, ["source", "sink", "B", "C", "A"]);
    }

    #[test]
    fn test_longest_duration_order() {
        let p = sample_project();
        let perm = permutation_from_rule(&p, &LongestDuration);
        let order: Vec<_> = perm.iter().collect();
        assert_eq!(order[0], "A");
    }

    #[test]
    fn test_most_successors_puts_source_first() {
        let p = sample_project();
        let perm = permutation_from_rule(&p, &MostSuccessors);
        assert_eq!(perm.iter().next(), Some("source"));
    }

    #[test]
    fn test_rule_permutations_decode() {
        let p = sample_project();
        for rule in [&ShortestDuration as &dyn PriorityRule, &LongestDuration, &MostSuccessors] {
            let perm = permutation_from_rule(&p, rule);
            let schedule = sgs::decode(&p, &perm).unwrap();
            assert_eq!(schedule.assignment_count(), p.activity_count());
        }
    }

    #[test]
    fn test_random_permutation_is_seeded() {
        let p = sample_project();
        let mut rng1 = SmallRng::seed_from_u64(7);
        let mut rng2 = SmallRng::seed_from_u64(7);
        assert_eq!(
            random_permutation(&p, &mut rng1),
            random_permutation(&p, &mut rng2)
        );
    }

    #[test]
    fn test_random_permutation_decodes() {
        let p = sample_project();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let perm = random_permutation(&p, &mut rng);
            // Any complete permutation of an acyclic project decodes
            let schedule = sgs::decode(&p, &perm).unwrap();
            assert_eq!(schedule.window("source"), Some((0, 0)));
        }
    }

    #[test]
    fn test_rule_metadata() {
        assert_eq!(ShortestDuration.name(), "SPT");
        assert_eq!(MostSuccessors.description(), "Most Successors");
    }
}
