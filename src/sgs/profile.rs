//! Residual resource capacity, owned by one decode call.
//!
//! Renewable resources keep a residual-capacity array indexed by discrete
//! period; non-renewable resources keep a single scalar pool that only
//! decreases. The profile is constructed fresh for every decode and
//! mutated destructively as activities commit — it is never shared between
//! calls, which is what makes parallel evaluation of independent
//! permutations safe one level up.

use crate::models::{Project, ResourceKind};

/// Per-resource residual capacity for a single decode call.
///
/// Resources are addressed by their position in the project's resource
/// catalog. Renewable arrays are sized `2·horizon + max_duration` so the
/// widest window starting at the last scanned period stays in bounds.
#[derive(Debug, Clone)]
pub struct ResourceProfile {
    entries: Vec<ProfileEntry>,
    scan_limit: u32,
}

#[derive(Debug, Clone)]
enum ProfileEntry {
    /// Residual units per period.
    Renewable(Vec<u32>),
    /// Monotonically decreasing project-wide pool.
    Pool(u32),
}

impl ResourceProfile {
    /// Initializes residual capacity from the project's catalog.
    pub fn new(project: &Project) -> Self {
        let scan_limit = project.horizon.saturating_mul(2);
        let len = scan_limit as usize + project.max_duration() as usize;

        let entries = project
            .resources
            .iter()
            .map(|r| match r.kind {
                ResourceKind::Renewable => {
                    ProfileEntry::Renewable((0..len).map(|t| r.capacity.at(t)).collect())
                }
                ResourceKind::NonRenewable => ProfileEntry::Pool(r.capacity.total()),
            })
            .collect();

        Self {
            entries,
            scan_limit,
        }
    }

    /// Exclusive upper bound on start periods the decoder may scan.
    pub fn scan_limit(&self) -> u32 {
        self.scan_limit
    }

    /// Whether resource `resource` can supply `quantity` units over the
    /// window `[start, start + duration)`.
    ///
    /// For a pool the window is irrelevant: the demand is feasible iff the
    /// remaining budget covers it.
    pub fn can_supply(&self, resource: usize, quantity: u32, start: u32, duration: u32) -> bool {
        match &self.entries[resource] {
            ProfileEntry::Renewable(residual) => {
                let s = start as usize;
                let e = s + duration as usize;
                residual[s..e].iter().all(|&units| units >= quantity)
            }
            ProfileEntry::Pool(residual) => *residual >= quantity,
        }
    }

    /// Consumes `quantity` units over `[start, start + duration)` (or from
    /// the pool, permanently).
    ///
    /// Callers must have established feasibility with [`can_supply`] for
    /// the same arguments; residual capacity never goes negative under
    /// that contract.
    ///
    /// [`can_supply`]: ResourceProfile::can_supply
    pub fn commit(&mut self, resource: usize, quantity: u32, start: u32, duration: u32) {
        match &mut self.entries[resource] {
            ProfileEntry::Renewable(residual) => {
                let s = start as usize;
                let e = s + duration as usize;
                for units in &mut residual[s..e] {
                    *units -= quantity;
                }
            }
            ProfileEntry::Pool(residual) => *residual -= quantity,
        }
    }

    /// Residual units of a resource at period `t` (pools ignore `t`).
    pub fn remaining(&self, resource: usize, t: u32) -> u32 {
        match &self.entries[resource] {
            ProfileEntry::Renewable(residual) => residual.get(t as usize).copied().unwrap_or(0),
            ProfileEntry::Pool(residual) => *residual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Resource};

    fn project_with(resources: Vec<Resource>) -> Project {
        let mut p = Project::new(10).with_activity(Activity::new("A").with_duration(4));
        for r in resources {
            p = p.with_resource(r);
        }
        p
    }

    #[test]
    fn test_sizing() {
        let p = project_with(vec![Resource::renewable("R1", 2)]);
        let profile = ResourceProfile::new(&p);
        assert_eq!(profile.scan_limit(), 20);
        // Indexable through the widest window starting at the last
        // scanned period
        assert_eq!(profile.remaining(0, 23), 2);
    }

    #[test]
    fn test_renewable_query_and_commit() {
        let p = project_with(vec![Resource::renewable("R1", 2)]);
        let mut profile = ResourceProfile::new(&p);

        assert!(profile.can_supply(0, 2, 0, 4));
        profile.commit(0, 2, 0, 4);

        // Fully consumed over [0, 4), free afterwards
        assert!(!profile.can_supply(0, 1, 0, 1));
        assert!(!profile.can_supply(0, 1, 2, 4));
        assert!(profile.can_supply(0, 1, 4, 4));
        assert_eq!(profile.remaining(0, 3), 0);
        assert_eq!(profile.remaining(0, 4), 2);
    }

    #[test]
    fn test_window_needs_full_coverage() {
        let p = project_with(vec![Resource::renewable("R1", 2)]);
        let mut profile = ResourceProfile::new(&p);
        profile.commit(0, 1, 3, 1);

        // One period inside the window dips below the demand
        assert!(!profile.can_supply(0, 2, 0, 4));
        assert!(profile.can_supply(0, 1, 0, 4));
    }

    #[test]
    fn test_capacity_profile_extension() {
        let p = project_with(vec![
            Resource::renewable("R1", 3).with_profile(vec![3, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
        ]);
        let profile = ResourceProfile::new(&p);
        assert_eq!(profile.remaining(0, 1), 3);
        assert_eq!(profile.remaining(0, 2), 1);
        // Final profile value repeats past its end
        assert_eq!(profile.remaining(0, 15), 1);
    }

    #[test]
    fn test_pool_ignores_window() {
        let p = project_with(vec![Resource::non_renewable("M1", 3)]);
        let mut profile = ResourceProfile::new(&p);

        assert!(profile.can_supply(0, 2, 0, 4));
        profile.commit(0, 2, 0, 4);

        // Depletion is permanent and time-independent
        assert_eq!(profile.remaining(0, 0), 1);
        assert_eq!(profile.remaining(0, 19), 1);
        assert!(profile.can_supply(0, 1, 15, 2));
        assert!(!profile.can_supply(0, 2, 15, 2));
    }
}
