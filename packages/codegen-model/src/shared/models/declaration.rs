//! Declaration snapshot model
//!
//! Immutable descriptions of named program elements as reported by the host's
//! introspection service. Identity is structural: two descriptors for the same
//! declaration compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::annotation::Annotation;
use super::type_ref::{TypeKind, TypeRef};
use crate::features::declaration_result::{Guaranteed, Maybe};

/// Fully-qualified declaration identity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarationId(String);

impl DeclarationId {
    pub fn new(fqn: impl Into<String>) -> Self {
        Self(fqn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last dotted segment of the identity
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Everything before the last dotted segment
    pub fn namespace(&self) -> &str {
        self.0.rsplit_once('.').map(|(ns, _)| ns).unwrap_or("")
    }
}

impl From<&str> for DeclarationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DeclarationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Interface,
    Struct,
    Record,
    Enum,
}

impl DeclarationKind {
    pub fn type_kind(&self) -> TypeKind {
        match self {
            DeclarationKind::Class | DeclarationKind::Record => TypeKind::Class,
            DeclarationKind::Interface => TypeKind::Interface,
            DeclarationKind::Struct => TypeKind::Struct,
            DeclarationKind::Enum => TypeKind::Enum,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Accessibility {
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Internal => "internal",
            Accessibility::Protected => "protected",
            Accessibility::Private => "private",
        }
    }
}

/// Method parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    /// Default value expression, verbatim from the source
    #[serde(default)]
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Method declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub accessibility: Accessibility,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            is_static: false,
            accessibility: Accessibility::Public,
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn param(self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.with_parameter(Parameter::new(name, ty))
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Every method declares a return type, even if it is `void`
    pub fn return_type(&self) -> Guaranteed<&TypeRef> {
        Guaranteed::new(&self.return_type)
    }
}

/// Property declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default = "default_readable")]
    pub readable: bool,
    #[serde(default)]
    pub is_static: bool,
}

fn default_readable() -> bool {
    true
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            readable: true,
            is_static: false,
        }
    }

    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }
}

/// Declaration descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub id: DeclarationId,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    pub kind: DeclarationKind,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
    /// Base class first (for classes), then implemented/extended interfaces
    #[serde(default)]
    pub base_types: Vec<TypeRef>,
}

impl Declaration {
    pub fn builder(id: impl Into<DeclarationId>) -> DeclarationBuilder {
        DeclarationBuilder::new(id)
    }

    pub fn identity(&self) -> Guaranteed<&DeclarationId> {
        Guaranteed::new(&self.id)
    }

    /// Annotations of one kind, in declaration order
    pub fn annotations_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Annotation> + 'a {
        self.annotations.iter().filter(move |a| a.is_kind(kind))
    }

    pub fn has_annotation(&self, kind: &str) -> bool {
        self.annotations.iter().any(|a| a.is_kind(kind))
    }

    pub fn is_interface(&self) -> bool {
        self.kind == DeclarationKind::Interface
    }

    /// First base type that is a class
    pub fn base_class(&self) -> Maybe<&TypeRef> {
        self.base_types
            .iter()
            .find(|ty| ty.kind == TypeKind::Class)
            .into()
    }

    pub fn instance_methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.methods.iter().filter(|m| !m.is_static)
    }

    pub fn readable_properties(&self) -> impl Iterator<Item = &PropertyDecl> {
        self.properties.iter().filter(|p| p.readable && !p.is_static)
    }

    /// Resolved reference to this declaration
    pub fn as_type_ref(&self) -> TypeRef {
        TypeRef::new(self.name.clone(), self.kind.type_kind())
            .with_namespace(self.namespace.clone())
            .resolved(self.id.clone())
    }
}

/// Builder for Declaration
#[derive(Debug, Clone)]
pub struct DeclarationBuilder {
    declaration: Declaration,
}

impl DeclarationBuilder {
    /// Name and namespace are derived from the dotted identity
    pub fn new(id: impl Into<DeclarationId>) -> Self {
        let id = id.into();
        Self {
            declaration: Declaration {
                name: id.simple_name().to_string(),
                namespace: id.namespace().to_string(),
                id,
                kind: DeclarationKind::Class,
                accessibility: Accessibility::Public,
                annotations: Vec::new(),
                methods: Vec::new(),
                properties: Vec::new(),
                base_types: Vec::new(),
            },
        }
    }

    pub fn kind(mut self, kind: DeclarationKind) -> Self {
        self.declaration.kind = kind;
        self
    }

    pub fn interface(self) -> Self {
        self.kind(DeclarationKind::Interface)
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.declaration.accessibility = accessibility;
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.declaration.annotations.push(annotation);
        self
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.declaration.methods.push(method);
        self
    }

    pub fn property(mut self, property: PropertyDecl) -> Self {
        self.declaration.properties.push(property);
        self
    }

    pub fn base_type(mut self, base: TypeRef) -> Self {
        self.declaration.base_types.push(base);
        self
    }

    pub fn build(self) -> Declaration {
        self.declaration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_id_segments() {
        let id = DeclarationId::new("App.Services.IEmailService");
        assert_eq!(id.simple_name(), "IEmailService");
        assert_eq!(id.namespace(), "App.Services");

        let bare = DeclarationId::new("Root");
        assert_eq!(bare.simple_name(), "Root");
        assert_eq!(bare.namespace(), "");
    }

    #[test]
    fn test_builder_derives_name_and_namespace() {
        let decl = Declaration::builder("App.Services.IClock").interface().build();
        assert_eq!(decl.name, "IClock");
        assert_eq!(decl.namespace, "App.Services");
        assert!(decl.is_interface());
    }

    #[test]
    fn test_structural_identity() {
        let a = Declaration::builder("App.Root")
            .annotation(Annotation::new("Runtime"))
            .build();
        let b = Declaration::builder("App.Root")
            .annotation(Annotation::new("Runtime"))
            .build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_instance_members_filter_static_and_write_only() {
        let decl = Declaration::builder("App.Clock")
            .method(MethodDecl::new("Now", TypeRef::value_type("DateTime")))
            .method(MethodDecl::new("Create", TypeRef::class("Clock")).as_static())
            .property(PropertyDecl::new("Zone", TypeRef::class("string")))
            .property(PropertyDecl::new("Secret", TypeRef::class("string")).write_only())
            .build();

        let methods: Vec<_> = decl.instance_methods().map(|m| m.name.as_str()).collect();
        let properties: Vec<_> = decl.readable_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(methods, vec!["Now"]);
        assert_eq!(properties, vec!["Zone"]);
    }

    #[test]
    fn test_base_class_skips_interfaces() {
        let decl = Declaration::builder("App.Db")
            .base_type(TypeRef::interface("IDisposable"))
            .base_type(TypeRef::class("DbContext"))
            .build();
        assert_eq!(decl.base_class().map(|t| t.name.as_str()).or_default(""), "DbContext");
    }
}
