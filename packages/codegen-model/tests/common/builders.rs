//! Test data builders

use codegen_model::{Annotation, AnnotationValue, Declaration, DeclarationId, DeclarationSnapshot, MethodDecl, TypeKind, TypeRef};

/// `Task` or `Task<T>`
pub fn task(inner: Option<TypeRef>) -> TypeRef {
    match inner {
        Some(inner) => TypeRef::generic("Task", TypeKind::Class, vec![inner]),
        None => TypeRef::class("Task"),
    }
}

/// Resolved reference to a declaration by its fully-qualified name
pub fn type_of(fqn: &str) -> TypeRef {
    let id = DeclarationId::new(fqn);
    TypeRef::class(id.simple_name()).with_namespace(id.namespace()).resolved(fqn)
}

/// Resolved interface reference
pub fn interface_of(fqn: &str) -> TypeRef {
    let id = DeclarationId::new(fqn);
    TypeRef::interface(id.simple_name()).with_namespace(id.namespace()).resolved(fqn)
}

/// Builder for capability-module declarations
#[derive(Debug)]
pub struct ModuleBuilder {
    id: String,
    annotations: Vec<Annotation>,
}

impl ModuleBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            annotations: Vec::new(),
        }
    }

    /// Add a module annotation targeting an interface
    pub fn targets(mut self, interface_fqn: &str) -> Self {
        self.annotations
            .push(Annotation::new("EffectsModule").with_type_arg(interface_of(interface_fqn)));
        self
    }

    /// Add a module annotation with extra named arguments
    pub fn targets_with(mut self, interface_fqn: &str, named: Vec<(&str, AnnotationValue)>) -> Self {
        let mut annotation = Annotation::new("EffectsModule").with_type_arg(interface_of(interface_fqn));
        for (name, value) in named {
            annotation = annotation.with_named(name, value);
        }
        self.annotations.push(annotation);
        self
    }

    pub fn uses(mut self, module_fqn: &str) -> Self {
        self.annotations
            .push(Annotation::new("Uses").with_type_arg(type_of(module_fqn)));
        self
    }

    pub fn build(self) -> Declaration {
        self.annotations
            .into_iter()
            .fold(Declaration::builder(self.id.as_str()), |b, a| b.annotation(a))
            .build()
    }
}

/// Composition root referencing modules in order
pub fn runtime(id: &str, uses: &[&str]) -> Declaration {
    uses.iter()
        .fold(
            Declaration::builder(id).annotation(Annotation::new("Runtime")),
            |b, module| b.annotation(Annotation::new("Uses").with_type_arg(type_of(module))),
        )
        .build()
}

/// Test composition root mirroring `production`
pub fn test_runtime(id: &str, production: &str) -> Declaration {
    Declaration::builder(id)
        .annotation(Annotation::new("TestRuntime").with_type_arg(type_of(production)))
        .build()
}

/// Interface with the given methods
pub fn capability(id: &str, methods: Vec<MethodDecl>) -> Declaration {
    methods
        .into_iter()
        .fold(Declaration::builder(id).interface(), |b, m| b.method(m))
        .build()
}

pub fn snapshot(declarations: Vec<Declaration>) -> DeclarationSnapshot {
    DeclarationSnapshot::new(declarations).expect("fixture identities are unique")
}
