//! Annotation model
//!
//! An annotation is a (kind, target declaration, argument list) triple. The
//! target is implied by the declaration that owns it. Arguments are kept in
//! source order; named arguments keep their order too.

use serde::{Deserialize, Serialize};

use super::type_ref::TypeRef;
use crate::features::declaration_result::Maybe;
use crate::shared::constants::ANNOTATION_TYPE_SUFFIX;

/// Raw annotation argument value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnnotationValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Type(TypeRef),
    Array(Vec<AnnotationValue>),
    Null,
}

impl AnnotationValue {
    /// Array of string literals
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnnotationValue::Array(
            values
                .into_iter()
                .map(|s| AnnotationValue::Str(s.into()))
                .collect(),
        )
    }
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        AnnotationValue::Str(value.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(value: String) -> Self {
        AnnotationValue::Str(value)
    }
}

impl From<bool> for AnnotationValue {
    fn from(value: bool) -> Self {
        AnnotationValue::Bool(value)
    }
}

impl From<i64> for AnnotationValue {
    fn from(value: i64) -> Self {
        AnnotationValue::Int(value)
    }
}

impl From<TypeRef> for AnnotationValue {
    fn from(value: TypeRef) -> Self {
        AnnotationValue::Type(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedArgument {
    pub name: String,
    pub value: AnnotationValue,
}

/// Annotation attached to a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: String,
    /// Type arguments of a generic annotation, e.g. `EffectsModule<IClock>`
    #[serde(default)]
    pub type_args: Vec<TypeRef>,
    /// Positional (constructor) arguments
    #[serde(default)]
    pub args: Vec<AnnotationValue>,
    #[serde(default)]
    pub named: Vec<NamedArgument>,
}

impl Annotation {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            type_args: Vec::new(),
            args: Vec::new(),
            named: Vec::new(),
        }
    }

    pub fn with_type_arg(mut self, ty: TypeRef) -> Self {
        self.type_args.push(ty);
        self
    }

    pub fn with_arg(mut self, value: impl Into<AnnotationValue>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<AnnotationValue>) -> Self {
        self.named.push(NamedArgument {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Matches `kind` with or without the conventional `Attribute` suffix
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
            || self
                .kind
                .strip_suffix(ANNOTATION_TYPE_SUFFIX)
                .is_some_and(|base| base == kind)
    }

    pub fn arg(&self, index: usize) -> Maybe<&AnnotationValue> {
        self.args.get(index).into()
    }

    /// First named argument with this name
    pub fn named_value(&self, name: &str) -> Maybe<&AnnotationValue> {
        self.named
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
            .into()
    }

    pub fn type_arg(&self, index: usize) -> Maybe<&TypeRef> {
        self.type_args.get(index).into()
    }
}
