//! Test Double Mirror
//!
//! A test composition root names its production root through a typed
//! back-reference and receives that root's resolved capability list
//! verbatim. Modules are never re-resolved here.

pub mod application;
pub mod domain;
pub mod ports;

pub use application::*;
pub use domain::*;
pub use ports::*;
