//! In-memory declaration snapshot
//!
//! An immutable, ordered set of declarations with an identity index. Hosts
//! either build one directly or hand over a serialized snapshot:
//!
//! ```json
//! { "declarations": [ { "id": "App.IClock", "name": "IClock", "kind": "interface" } ] }
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::declaration_result::Maybe;
use crate::shared::models::{Declaration, DeclarationId, GenerationError, Result};
use crate::shared::ports::DeclarationHost;

/// Snapshot loading error
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] GenerationError),
}

#[derive(Serialize, Deserialize)]
struct SnapshotDocument {
    declarations: Vec<Declaration>,
}

/// Immutable declaration snapshot
#[derive(Debug, Clone)]
pub struct DeclarationSnapshot {
    declarations: Vec<Declaration>,
    index: FxHashMap<DeclarationId, usize>,
}

impl DeclarationSnapshot {
    /// Index the declarations; a repeated identity is a configuration error
    pub fn new(declarations: Vec<Declaration>) -> Result<Self> {
        let mut index = FxHashMap::default();
        index.reserve(declarations.len());

        for (position, declaration) in declarations.iter().enumerate() {
            if index.insert(declaration.id.clone(), position).is_some() {
                return Err(GenerationError::configuration(
                    declaration.id.clone(),
                    "declaration appears more than once in the snapshot",
                ));
            }
        }

        Ok(Self {
            declarations,
            index,
        })
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_str(content)?;
        Ok(Self::new(document.declarations)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> std::result::Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> std::result::Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(&SnapshotDocument {
            declarations: self.declarations.clone(),
        })?)
    }

    /// Lookup by fully-qualified name
    pub fn get(&self, fqn: &str) -> Option<&Declaration> {
        self.lookup(&DeclarationId::new(fqn)).into_option()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }
}

impl DeclarationHost for DeclarationSnapshot {
    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn lookup(&self, id: &DeclarationId) -> Maybe<&Declaration> {
        self.index
            .get(id)
            .and_then(|&position| self.declarations.get(position))
            .into()
    }
}
