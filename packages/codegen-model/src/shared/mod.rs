//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features:
//! the declaration snapshot model, the error taxonomy, the host port
//! and identifier naming helpers.

pub mod constants;
pub mod models;
pub mod ports;
pub mod utils;

// Re-exports for convenience
pub use models::*;
