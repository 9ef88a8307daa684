//! Lifting strategies

use serde::{Deserialize, Serialize};

/// How a raw method signature maps onto the effect abstraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LiftingStrategy {
    /// Asynchronous, wraps nothing
    AsyncVoid,
    /// Asynchronous, wraps a nullable value
    AsyncNullableToOption,
    /// Asynchronous, wraps a non-nullable value
    AsyncValue,
    /// Synchronous, returns nothing
    SyncVoid,
    /// Synchronous, returns a nullable value
    SyncNullableToOption,
    /// Synchronous, returns a non-nullable value
    SyncValue,
}

impl LiftingStrategy {
    pub const ALL: [LiftingStrategy; 6] = [
        LiftingStrategy::AsyncVoid,
        LiftingStrategy::AsyncNullableToOption,
        LiftingStrategy::AsyncValue,
        LiftingStrategy::SyncVoid,
        LiftingStrategy::SyncNullableToOption,
        LiftingStrategy::SyncValue,
    ];

    pub fn is_async(&self) -> bool {
        matches!(
            self,
            LiftingStrategy::AsyncVoid
                | LiftingStrategy::AsyncNullableToOption
                | LiftingStrategy::AsyncValue
        )
    }

    pub fn is_void(&self) -> bool {
        matches!(self, LiftingStrategy::AsyncVoid | LiftingStrategy::SyncVoid)
    }

    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            LiftingStrategy::AsyncNullableToOption | LiftingStrategy::SyncNullableToOption
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LiftingStrategy::AsyncVoid => "AsyncVoid",
            LiftingStrategy::AsyncNullableToOption => "AsyncNullableToOption",
            LiftingStrategy::AsyncValue => "AsyncValue",
            LiftingStrategy::SyncVoid => "SyncVoid",
            LiftingStrategy::SyncNullableToOption => "SyncNullableToOption",
            LiftingStrategy::SyncValue => "SyncValue",
        }
    }
}

impl std::fmt::Display for LiftingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
