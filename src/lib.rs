//! Serial schedule generation for the resource-constrained project
//! scheduling problem (RCPSP).
//!
//! Decodes a priority permutation of activities into a concrete,
//! resource-feasible schedule: each activity is placed at the earliest
//! start that satisfies both its precedence constraints and the residual
//! capacity of every resource it demands. This is the decode function at
//! the core of permutation-based search methods (GA, SA, local search) —
//! the search itself lives outside this crate and only consumes the
//! `Project` → `Schedule` contract.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `Resource`, `Project`,
//!   `Permutation`, `Schedule`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   references, DAG cycles, source/sink invariants)
//! - **`sgs`**: The serial generation scheme — predecessor index, resource
//!   profile, ready-activity selection, and the decoding loop
//! - **`priority`**: Priority-rule and random permutation construction
//!
//! # References
//!
//! - Kolisch (1996), "Serial and parallel resource-constrained project
//!   scheduling methods revisited"
//! - Kolisch & Hartmann (1999), "Heuristic Algorithms for Solving the
//!   Resource-Constrained Project Scheduling Problem"
//! - Brucker (2007), "Scheduling Algorithms"

pub mod models;
pub mod priority;
pub mod sgs;
pub mod validation;
