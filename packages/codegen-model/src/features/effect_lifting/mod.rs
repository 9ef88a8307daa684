//! Effect Lifting Classifier
//!
//! Normalizes a method's declared return type into one of six lifting
//! strategies plus the type the effect produces. Classification is a closed
//! decision over a structural shape: synchrony first, then void, value or
//! nullable value within each branch.

pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
