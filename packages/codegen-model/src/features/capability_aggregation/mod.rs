//! Capability Aggregator
//!
//! Flattens a composition root's module references into one ordered,
//! deduplicated capability list. References are walked depth-first in
//! declaration order; the first occurrence of a capability interface wins.

pub mod application;
pub mod domain;

pub use application::*;
pub use domain::*;
