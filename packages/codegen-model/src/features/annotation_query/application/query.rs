//! Typed annotation query

use super::super::domain::FromAnnotationValue;
use crate::features::declaration_result::{Guaranteed, Maybe};
use crate::shared::models::{Annotation, Declaration, GenerationError, Result, TypeRef};

/// One annotation of a given kind, read through typed accessors
///
/// Queries borrow the snapshot; they are `Copy` and cheap to pass around.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationQuery<'a> {
    declaration: &'a Declaration,
    annotation: &'a Annotation,
}

impl<'a> AnnotationQuery<'a> {
    pub fn new(declaration: &'a Declaration, annotation: &'a Annotation) -> Self {
        Self {
            declaration,
            annotation,
        }
    }

    /// Every annotation of `kind` on the declaration, in declaration order
    pub fn all(declaration: &'a Declaration, kind: &'a str) -> Vec<AnnotationQuery<'a>> {
        declaration
            .annotations_of(kind)
            .map(|annotation| Self::new(declaration, annotation))
            .collect()
    }

    pub fn first(declaration: &'a Declaration, kind: &'a str) -> Maybe<AnnotationQuery<'a>> {
        declaration
            .annotations_of(kind)
            .next()
            .map(|annotation| Self::new(declaration, annotation))
            .into()
    }

    /// At most one annotation of a non-repeatable kind
    ///
    /// A second occurrence is a configuration error on the declaration.
    pub fn single(declaration: &'a Declaration, kind: &'a str) -> Result<Maybe<AnnotationQuery<'a>>> {
        let mut matches = declaration.annotations_of(kind);
        let first = matches.next();
        if matches.next().is_some() {
            return Err(GenerationError::configuration(
                declaration.id.clone(),
                format!("annotation '{kind}' may appear at most once"),
            ));
        }
        Ok(first.map(|annotation| Self::new(declaration, annotation)).into())
    }

    pub fn kind(&self) -> &'a str {
        &self.annotation.kind
    }

    pub fn declaration(&self) -> Guaranteed<&'a Declaration> {
        Guaranteed::new(self.declaration)
    }

    pub fn annotation(&self) -> &'a Annotation {
        self.annotation
    }

    /// Positional argument converted to `T`; absent when missing or mistyped
    pub fn constructor_arg<T: FromAnnotationValue>(&self, index: usize) -> Maybe<T> {
        self.annotation
            .arg(index)
            .and_then(T::from_annotation_value)
    }

    /// Named argument converted to `T`; absent when missing or mistyped
    pub fn named_arg<T: FromAnnotationValue>(&self, name: &str) -> Maybe<T> {
        self.annotation
            .named_value(name)
            .and_then(T::from_annotation_value)
    }

    /// Generic type argument of the annotation
    pub fn type_arg(&self, index: usize) -> Maybe<TypeRef> {
        self.annotation.type_arg(index).cloned()
    }

    /// A type reference given in any of the three supported forms
    ///
    /// Checked in order: first generic type argument, first positional
    /// argument, then the named argument `named_key`.
    pub fn type_reference(&self, named_key: &str) -> Maybe<TypeRef> {
        self.type_arg(0)
            .or_else(|| self.constructor_arg::<TypeRef>(0))
            .or_else(|| self.named_arg::<TypeRef>(named_key))
    }

    /// Required positional argument; absence is a configuration error
    pub fn require_constructor_arg<T: FromAnnotationValue>(
        &self,
        index: usize,
        message: &str,
    ) -> Result<T> {
        self.constructor_arg(index)
            .or_configuration_error(&self.declaration.id, message)
    }
}
