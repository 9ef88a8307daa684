//! Declaration host port
//!
//! The host's introspection service, seen through an immutable snapshot.
//! Implementations must be safe to share across threads: the pipeline may
//! model disjoint composition roots concurrently.

use crate::features::declaration_result::Maybe;
use crate::shared::models::{Declaration, DeclarationId, TypeRef};

pub trait DeclarationHost: Send + Sync {
    /// All declarations, in source order
    fn declarations(&self) -> &[Declaration];

    /// Look up a declaration by identity
    fn lookup(&self, id: &DeclarationId) -> Maybe<&Declaration>;

    /// Resolve a type reference to its declaration
    ///
    /// Uses the host-resolved symbol when present, otherwise falls back to
    /// the qualified name.
    fn resolve_type(&self, ty: &TypeRef) -> Maybe<&Declaration> {
        ty.resolved_declaration()
            .and_then(|id| self.lookup(id))
            .or_else(|| self.lookup(&DeclarationId::new(ty.qualified_name())))
    }
}
