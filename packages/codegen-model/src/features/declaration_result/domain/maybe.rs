//! Possibly-absent query result

use crate::shared::models::{DeclarationId, GenerationError, Result};

/// A query result that may be absent
///
/// Absence is explicit: callers either supply a default, chain an
/// alternative query with [`Maybe::or_else`], or turn absence into a
/// diagnostic with [`Maybe::or_throw`] / [`Maybe::or_configuration_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    pub fn some(value: T) -> Self {
        Self(Some(value))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Apply `f` only if present; absence propagates
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        Maybe(self.0.map(f))
    }

    /// Chain a dependent query that may itself be absent
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        Maybe(self.0.and_then(|value| f(value).0))
    }

    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        Self(self.0.filter(predicate))
    }

    pub fn or_default(self, value: T) -> T {
        self.0.unwrap_or(value)
    }

    pub fn or_default_with<F: FnOnce() -> T>(self, supplier: F) -> T {
        self.0.unwrap_or_else(supplier)
    }

    /// Try an alternative computation when absent
    pub fn or_else<F: FnOnce() -> Maybe<T>>(self, supplier: F) -> Self {
        Self(self.0.or_else(|| supplier().0))
    }

    /// Absence becomes a resolution error against `declaration`
    pub fn or_throw(self, declaration: &DeclarationId, message: impl Into<String>) -> Result<T> {
        self.0
            .ok_or_else(|| GenerationError::resolution(declaration.clone(), message))
    }

    /// Absence becomes a configuration error against `declaration`
    pub fn or_configuration_error(
        self,
        declaration: &DeclarationId,
        message: impl Into<String>,
    ) -> Result<T> {
        self.0
            .ok_or_else(|| GenerationError::configuration(declaration.clone(), message))
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe(self.0.as_ref())
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T: Clone> Maybe<&T> {
    pub fn cloned(self) -> Maybe<T> {
        Maybe(self.0.cloned())
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Lift host-facing `Option`s into the wrapper at the boundary
pub trait IntoMaybe<T> {
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        Maybe(self)
    }
}
