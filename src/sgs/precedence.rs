//! Predecessor index.
//!
//! The project states precedence as successor adjacency; the decoder needs
//! the inverse view to decide when an activity becomes eligible. The index
//! is derived once per project in O(V + E) and is read-only afterwards, so
//! one index can serve any number of decode calls.

use crate::models::Project;
use std::collections::{HashMap, HashSet};

/// Direct predecessors per activity, inverted from successor adjacency.
#[derive(Debug, Clone)]
pub struct PredecessorIndex {
    preds: HashMap<String, HashSet<String>>,
}

impl PredecessorIndex {
    /// Derives the index from a project's successor adjacency.
    ///
    /// Every activity starts with an empty predecessor set; each edge
    /// `a → s` then adds `a` to the set of `s`. Edges naming unknown
    /// activities are ignored — `validation` reports those.
    pub fn from_project(project: &Project) -> Self {
        let mut preds: HashMap<String, HashSet<String>> = project
            .activities
            .iter()
            .map(|a| (a.id.clone(), HashSet::new()))
            .collect();

        for (from, successors) in &project.successors {
            for to in successors {
                if let Some(set) = preds.get_mut(to.as_str()) {
                    set.insert(from.clone());
                }
            }
        }

        Self { preds }
    }

    /// Wraps a predecessor mapping the caller already has, bypassing
    /// derivation.
    pub fn from_map(preds: HashMap<String, HashSet<String>>) -> Self {
        Self { preds }
    }

    /// Direct predecessors of an activity (`None` for unknown ids).
    pub fn of(&self, id: &str) -> Option<&HashSet<String>> {
        self.preds.get(id)
    }

    /// Number of direct predecessors (0 for unknown ids).
    pub fn count(&self, id: &str) -> usize {
        self.of(id).map(HashSet::len).unwrap_or(0)
    }
}
