//! Structural return-type shape

use crate::shared::models::TypeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Synchrony {
    Sync,
    Async,
}

/// What a (possibly unwrapped) return type carries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueShape {
    Void,
    Value(TypeRef),
    /// Nullable value; holds the inner, non-nullable type
    Nullable(TypeRef),
    /// A wrapper whose type argument the host could not resolve
    Unresolved,
}

/// Shape of a declared return type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReturnShape {
    pub synchrony: Synchrony,
    pub value: ValueShape,
}

impl ReturnShape {
    pub fn new(synchrony: Synchrony, value: ValueShape) -> Self {
        Self { synchrony, value }
    }

    pub fn is_async(&self) -> bool {
        self.synchrony == Synchrony::Async
    }
}
