//! Shared utilities

pub mod naming;
