//! Pipeline orchestration
//!
//! Runs the modeling stages over one declaration snapshot:
//! modules → runtimes → test runtimes. Failures stay local to their
//! declaration; cancellation is checked between top-level declarations.

pub mod cancellation;
pub mod error;
pub mod orchestrator;
pub mod result;

pub use cancellation::CancellationToken;
pub use error::Cancelled;
pub use orchestrator::GenerationPipeline;
pub use result::{DeclarationFailure, GenerationOutput, Stage};
