//! Return-type shape analysis
//!
//! Reads only the structure of a `TypeRef`: wrapper names, generic
//! arguments, the nullable marker. No host reflection happens here.

use super::super::domain::{ReturnShape, Synchrony, ValueShape};
use crate::config::LiftingConfig;
use crate::shared::models::{TypeKind, TypeRef};

pub struct ShapeAnalyzer<'a> {
    config: &'a LiftingConfig,
}

impl<'a> ShapeAnalyzer<'a> {
    pub fn new(config: &'a LiftingConfig) -> Self {
        Self { config }
    }

    /// Synchrony is decided first; the value shape is read inside the branch
    pub fn analyze(&self, declared: &TypeRef) -> ReturnShape {
        if self.is_async(declared) {
            ReturnShape::new(Synchrony::Async, self.wrapped_value(declared))
        } else {
            ReturnShape::new(Synchrony::Sync, self.value_shape(declared))
        }
    }

    /// An async wrapper takes at most one generic argument
    fn is_async(&self, ty: &TypeRef) -> bool {
        !ty.is_error()
            && self.config.is_async_wrapper(&ty.name)
            && ty.arity.max(ty.type_args.len()) <= 1
    }

    fn wrapped_value(&self, wrapper: &TypeRef) -> ValueShape {
        if !wrapper.is_generic() {
            return ValueShape::Void;
        }
        if wrapper.has_unresolved_args() {
            return ValueShape::Unresolved;
        }
        wrapper
            .type_arg(0)
            .map(|inner| self.value_shape(inner))
            .or_default(ValueShape::Unresolved)
    }

    fn value_shape(&self, ty: &TypeRef) -> ValueShape {
        if ty.kind == TypeKind::Void || self.config.is_void_name(&ty.name) {
            return ValueShape::Void;
        }
        if self.config.is_nullable_wrapper(&ty.name) && ty.is_generic() {
            if ty.has_unresolved_args() {
                return ValueShape::Unresolved;
            }
            return ty
                .type_arg(0)
                .map(|inner| ValueShape::Nullable(inner.without_nullable()))
                .or_default(ValueShape::Unresolved);
        }
        if ty.is_error() {
            return ValueShape::Unresolved;
        }
        if ty.nullable {
            return ValueShape::Nullable(ty.without_nullable());
        }
        ValueShape::Value(ty.clone())
    }
}
