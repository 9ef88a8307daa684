//! Pipeline control errors

use thiserror::Error;

/// The host cancelled the generation cycle
///
/// Not a user diagnostic: a cancelled run produces no output at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("generation cycle cancelled")]
pub struct Cancelled;
