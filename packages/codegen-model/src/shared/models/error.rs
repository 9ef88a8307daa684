//! Error types for the codegen-model crate
//!
//! Model construction raises exactly two kinds of error:
//! - Configuration: an annotation is missing a required argument or points at
//!   something that cannot be used as a declaration
//! - Resolution: a signature cannot be classified or a reference walk is
//!   inconsistent (cycles, conflicting capability interfaces)
//!
//! Both carry the identity of the offending declaration so the host can
//! surface them directly as diagnostics. Errors are local: they abort the
//! model under construction, never sibling declarations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::declaration::DeclarationId;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Annotation missing a required argument or referencing an unusable target
    Configuration,
    /// Unclassifiable signature, circular reference or capability conflict
    Resolution,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Resolution => "resolution",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified model construction error
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GenerationError {
    #[error("[configuration] {declaration}: {message}")]
    Configuration {
        declaration: DeclarationId,
        message: String,
    },

    #[error("[resolution] {declaration}: {message}")]
    Resolution {
        declaration: DeclarationId,
        message: String,
    },
}

impl GenerationError {
    pub fn configuration(declaration: DeclarationId, message: impl Into<String>) -> Self {
        Self::Configuration {
            declaration,
            message: message.into(),
        }
    }

    pub fn resolution(declaration: DeclarationId, message: impl Into<String>) -> Self {
        Self::Resolution {
            declaration,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Resolution { .. } => ErrorKind::Resolution,
        }
    }

    /// The declaration whose invariant was violated
    pub fn declaration(&self) -> &DeclarationId {
        match self {
            Self::Configuration { declaration, .. } | Self::Resolution { declaration, .. } => {
                declaration
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message, .. } | Self::Resolution { message, .. } => message,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    pub fn is_resolution(&self) -> bool {
        self.kind() == ErrorKind::Resolution
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GenerationError>;
