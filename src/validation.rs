//! Input validation for project instances.
//!
//! Checks structural integrity of a [`Project`] before decoding. Detects:
//! - Duplicate IDs
//! - Dangling successor or resource references
//! - Circular precedence dependencies (DAG validation)
//! - Malformed source/sink milestones
//! - Activities unreachable from the source
//! - Capacity profiles too short for the horizon
//!
//! The decoder assumes a structurally valid instance; run
//! [`validate_project`] once per instance, not per permutation.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22 (DFS, BFS)

use crate::models::{Capacity, Project, ResourceKind};
use std::collections::{HashMap, HashSet, VecDeque};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A precedence edge references an activity that doesn't exist.
    UnknownActivityReference,
    /// An activity demands a resource that doesn't exist.
    UnknownResourceReference,
    /// Precedence graph contains a cycle.
    CyclicPrecedence,
    /// Source or sink is missing, has nonzero duration, or has
    /// edges on the wrong side.
    InvalidMilestone,
    /// An activity cannot be reached from the source.
    UnreachableActivity,
    /// A capacity profile is shorter than `horizon + 1`, or a
    /// non-renewable resource has a time-varying profile.
    InvalidCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a project instance.
///
/// Checks:
/// 1. No duplicate activity or resource IDs
/// 2. All precedence edges reference existing activities
/// 3. All resource demands reference cataloged resources
/// 4. No circular precedence dependencies
/// 5. Source and sink are zero-duration milestones with no incoming
///    (source) / outgoing (sink) edges
/// 6. Every activity is reachable from the source
/// 7. Capacity profiles cover `horizon + 1` periods; non-renewable
///    capacities are constant
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_project(project: &Project) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect resource IDs
    let mut resource_ids = HashSet::new();
    for r in &project.resources {
        if !resource_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", r.id),
            ));
        }
    }

    // Collect activity IDs
    let mut activity_ids = HashSet::new();
    for a in &project.activities {
        if !activity_ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate activity ID: {}", a.id),
            ));
        }
    }

    // Check precedence references
    for (from, successors) in &project.successors {
        if !activity_ids.contains(from.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownActivityReference,
                format!("Precedence edge from unknown activity '{from}'"),
            ));
        }
        for to in successors {
            if !activity_ids.contains(to.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownActivityReference,
                    format!("Activity '{from}' lists unknown successor '{to}'"),
                ));
            }
        }
    }

    // Check resource demand references
    for a in &project.activities {
        for d in &a.demands {
            if !resource_ids.contains(d.resource_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownResourceReference,
                    format!(
                        "Activity '{}' demands unknown resource '{}'",
                        a.id, d.resource_id
                    ),
                ));
            }
        }
    }

    // Check capacities against the horizon
    for r in &project.resources {
        if let Capacity::Profile(p) = &r.capacity {
            if r.kind == ResourceKind::NonRenewable {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidCapacity,
                    format!("Non-renewable resource '{}' has a time-varying profile", r.id),
                ));
            } else if p.len() < project.horizon as usize + 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidCapacity,
                    format!(
                        "Capacity profile of '{}' covers {} periods, horizon needs {}",
                        r.id,
                        p.len(),
                        project.horizon + 1
                    ),
                ));
            }
        }
    }

    check_milestones(project, &activity_ids, &mut errors);

    // Check for cycles in the precedence graph (DFS-based)
    if let Some(cycle_err) = detect_cycles(project) {
        errors.push(cycle_err);
    } else {
        // Reachability is only meaningful on an acyclic graph with a
        // valid source
        if activity_ids.contains(project.source.as_str()) {
            check_reachability(project, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Source must have no incoming edges, sink no outgoing ones, both with
/// duration 0.
fn check_milestones(
    project: &Project,
    activity_ids: &HashSet<&str>,
    errors: &mut Vec<ValidationError>,
) {
    for (role, id) in [("source", &project.source), ("sink", &project.sink)] {
        if !activity_ids.contains(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMilestone,
                format!("Designated {role} '{id}' is not an activity"),
            ));
            continue;
        }
        if let Some(a) = project.activity(id) {
            if a.duration != 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidMilestone,
                    format!("{role} '{id}' must have duration 0, has {}", a.duration),
                ));
            }
        }
    }

    if activity_ids.contains(project.source.as_str()) {
        let has_incoming = project
            .successors
            .values()
            .any(|succs| succs.iter().any(|s| *s == project.source));
        if has_incoming {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMilestone,
                format!("Source '{}' has predecessors", project.source),
            ));
        }
    }

    if activity_ids.contains(project.sink.as_str())
        && !project.successors_of(&project.sink).is_empty()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMilestone,
            format!("Sink '{}' has successors", project.sink),
        ));
    }
}

/// Detects cycles in the precedence graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(project: &Project) -> Option<ValidationError> {
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for (from, successors) in &project.successors {
        adj.entry(from.as_str())
            .or_default()
            .extend(successors.iter().map(String::as_str));
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for a in &project.activities {
        let node = a.id.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrecedence,
                format!("Circular precedence detected involving activity '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

/// BFS from the source; anything not visited is unreachable.
fn check_reachability(project: &Project, errors: &mut Vec<ValidationError>) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    seen.insert(project.source.as_str());
    queue.push_back(project.source.as_str());

    while let Some(node) = queue.pop_front() {
        for next in project.successors_of(node) {
            if seen.insert(next.as_str()) {
                queue.push_back(next.as_str());
            }
        }
    }

    for a in &project.activities {
        if !seen.contains(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnreachableActivity,
                format!("Activity '{}' is not reachable from the source", a.id),
            ));
        }
    }
}
