//! Annotation Query Layer
//!
//! Typed, defaulted access to an annotation's raw argument list:
//! positional (constructor) arguments, named arguments and generic type
//! arguments. Every accessor answers with a [`Maybe`](crate::Maybe); callers
//! that require a value convert absence into a configuration error.

pub mod application;
pub mod domain;

pub use application::*;
pub use domain::*;
