//! Guaranteed-present query result

use std::ops::Deref;

use super::maybe::Maybe;

/// A query result that is present by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guaranteed<T>(T);

impl<T> Guaranteed<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Guaranteed<U> {
        Guaranteed(f(self.0))
    }

    /// Widen into a possibly-absent result for chaining with other queries
    pub fn into_maybe(self) -> Maybe<T> {
        Maybe::some(self.0)
    }
}

impl<T> Deref for Guaranteed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Guaranteed<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
