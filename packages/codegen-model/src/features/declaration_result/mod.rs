//! Declaration Result Wrapper
//!
//! Every introspection query answers with one of two explicit shapes:
//! - [`Guaranteed`]: the value is always present and can be used directly
//! - [`Maybe`]: the value may be absent and must be unwrapped or defaulted
//!
//! Components built on top of this feature never branch on absence
//! themselves; they map, default, chain alternatives or convert absence
//! into a typed error.

pub mod domain;

pub use domain::*;
