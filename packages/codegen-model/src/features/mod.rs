//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains (as needed):
//! - domain/         - Pure models and decision logic
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases
//! - infrastructure/ - Concrete analyzers behind the use cases

// Null-safety discipline over introspection results
pub mod declaration_result;

// Typed, defaulted annotation argument access
pub mod annotation_query;

// Method signature → effect lifting strategy
pub mod effect_lifting;

// Capability declaration → Module Model
pub mod module_model;

// Composition root → flat Capability list
pub mod capability_aggregation;

// Production runtime → test runtime
pub mod test_double;
