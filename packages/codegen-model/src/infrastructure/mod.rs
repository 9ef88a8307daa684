//! Host implementations of the declaration port

mod snapshot;

pub use snapshot::{DeclarationSnapshot, SnapshotError};
