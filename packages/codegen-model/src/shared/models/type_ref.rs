//! Structural type references
//!
//! A `TypeRef` is the host's description of a type occurrence (a return type,
//! a parameter type, an annotation type argument). It carries only shape:
//! name, kind, generic arguments, nullability and, when the host could
//! resolve it, the declaration it points at.

use serde::{Deserialize, Serialize};

use super::declaration::DeclarationId;
use crate::features::declaration_result::Maybe;

/// Type kind as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Void,
    Class,
    Interface,
    Struct,
    Enum,
    TypeParameter,
    Array,
    /// The host could not resolve the type
    Error,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Void => "void",
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::TypeParameter => "type_parameter",
            TypeKind::Array => "array",
            TypeKind::Error => "error",
        }
    }
}

/// Structural type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    pub kind: TypeKind,

    /// Resolved generic arguments, in order
    #[serde(default)]
    pub type_args: Vec<TypeRef>,

    /// Declared generic parameter count
    ///
    /// An arity larger than `type_args.len()` means some arguments did not
    /// resolve.
    #[serde(default)]
    pub arity: usize,

    #[serde(default)]
    pub nullable: bool,

    /// Declaration this reference resolves to, if the host knows it
    #[serde(default)]
    pub declaration: Option<DeclarationId>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            kind,
            type_args: Vec::new(),
            arity: 0,
            nullable: false,
            declaration: None,
        }
    }

    pub fn void() -> Self {
        Self::new("void", TypeKind::Void)
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    pub fn value_type(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Struct)
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::TypeParameter)
    }

    pub fn error(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Error)
    }

    /// Generic instantiation with fully resolved arguments
    pub fn generic(name: impl Into<String>, kind: TypeKind, type_args: Vec<TypeRef>) -> Self {
        let arity = type_args.len();
        Self {
            type_args,
            arity,
            ..Self::new(name, kind)
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn resolved(mut self, declaration: impl Into<DeclarationId>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }

    pub fn type_arg(&self, index: usize) -> Maybe<&TypeRef> {
        self.type_args.get(index).into()
    }

    pub fn resolved_declaration(&self) -> Maybe<&DeclarationId> {
        self.declaration.as_ref().into()
    }

    pub fn is_error(&self) -> bool {
        self.kind == TypeKind::Error
    }

    pub fn is_generic(&self) -> bool {
        self.arity > 0 || !self.type_args.is_empty()
    }

    /// True when a declared generic argument is missing or failed to resolve
    pub fn has_unresolved_args(&self) -> bool {
        self.arity > self.type_args.len() || self.type_args.iter().any(TypeRef::is_error)
    }

    /// Same reference with the nullable marker removed
    pub fn without_nullable(&self) -> Self {
        Self {
            nullable: false,
            ..self.clone()
        }
    }

    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Stable identity used to compare capability dependencies
    pub fn identity(&self) -> String {
        self.resolved_declaration()
            .map(|id| id.as_str().to_string())
            .or_default_with(|| self.qualified_display())
    }

    /// Host-neutral type expression, e.g. `Task<bool>` or `string?`
    pub fn display(&self) -> String {
        let mut out = self.name.clone();
        self.push_args(&mut out, TypeRef::display);
        if self.nullable {
            out.push('?');
        }
        out
    }

    fn qualified_display(&self) -> String {
        let mut out = self.qualified_name();
        self.push_args(&mut out, TypeRef::qualified_display);
        if self.nullable {
            out.push('?');
        }
        out
    }

    fn push_args(&self, out: &mut String, render: fn(&TypeRef) -> String) {
        if !self.is_generic() {
            return;
        }
        let count = self.arity.max(self.type_args.len());
        let args: Vec<String> = (0..count)
            .map(|i| {
                self.type_arg(i)
                    .map(render)
                    .or_default_with(|| "?".to_string())
            })
            .collect();
        out.push('<');
        out.push_str(&args.join(", "));
        out.push('>');
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
