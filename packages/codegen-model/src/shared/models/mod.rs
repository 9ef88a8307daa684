//! Shared models

mod annotation;
mod declaration;
mod error;
mod type_ref;

pub use annotation::{Annotation, AnnotationValue, NamedArgument};
pub use declaration::{
    Accessibility, Declaration, DeclarationBuilder, DeclarationId, DeclarationKind, MethodDecl,
    Parameter, PropertyDecl,
};
pub use error::{ErrorKind, GenerationError, Result};
pub use type_ref::{TypeKind, TypeRef};
