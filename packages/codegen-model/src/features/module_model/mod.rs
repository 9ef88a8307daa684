//! Module Model Builder
//!
//! Turns one capability-module annotation into a [`ModuleModel`]: the
//! resolved target type, its derived capability identifiers, the filtered and
//! classified effect methods and, for persistence-context targets, the named
//! record collections.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;
