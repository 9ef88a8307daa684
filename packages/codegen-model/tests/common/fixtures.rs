//! Test fixtures

use codegen_model::{Declaration, DeclarationSnapshot, MethodDecl, TypeRef};

use super::builders::*;

/// `IEmailService` with `SendAsync(to, subject, body)` and `ValidateAsync(email)`
pub fn email_service() -> Declaration {
    capability(
        "App.Services.IEmailService",
        vec![
            MethodDecl::new("SendAsync", task(None))
                .param("to", TypeRef::class("string"))
                .param("subject", TypeRef::class("string"))
                .param("body", TypeRef::class("string")),
            MethodDecl::new("ValidateAsync", task(Some(TypeRef::value_type("bool"))))
                .param("email", TypeRef::class("string")),
        ],
    )
}

pub fn clock() -> Declaration {
    capability(
        "App.Services.IClock",
        vec![MethodDecl::new("Now", TypeRef::value_type("DateTime"))],
    )
}

pub fn user_store() -> Declaration {
    capability(
        "App.Services.IUserStore",
        vec![
            MethodDecl::new("FindAsync", task(Some(TypeRef::class("User").nullable())))
                .param("id", TypeRef::value_type("Guid")),
            MethodDecl::new("Count", TypeRef::value_type("int")),
            MethodDecl::new("Evict", TypeRef::void()).param("id", TypeRef::value_type("Guid")),
        ],
    )
}

/// Email service behind one module, referenced by one runtime and mirrored
pub fn email_snapshot() -> DeclarationSnapshot {
    snapshot(vec![
        email_service(),
        ModuleBuilder::new("App.Modules.EmailModule")
            .targets("App.Services.IEmailService")
            .build(),
        runtime("App.AppRuntime", &["App.Modules.EmailModule"]),
        test_runtime("App.Tests.TestAppRuntime", "App.AppRuntime"),
    ])
}

/// Module A provides {Clock}; module B provides {Clock, UserStore}
pub fn overlapping_snapshot() -> DeclarationSnapshot {
    snapshot(vec![
        clock(),
        user_store(),
        ModuleBuilder::new("App.Modules.A")
            .targets("App.Services.IClock")
            .build(),
        ModuleBuilder::new("App.Modules.B")
            .targets("App.Services.IClock")
            .targets("App.Services.IUserStore")
            .build(),
        runtime("App.AppRuntime", &["App.Modules.A", "App.Modules.B"]),
        test_runtime("App.Tests.TestAppRuntime", "App.AppRuntime"),
    ])
}

/// Several independent roots, one of them broken
pub fn mixed_snapshot() -> DeclarationSnapshot {
    snapshot(vec![
        email_service(),
        clock(),
        user_store(),
        ModuleBuilder::new("App.Modules.EmailModule")
            .targets("App.Services.IEmailService")
            .build(),
        ModuleBuilder::new("App.Modules.Infra")
            .targets("App.Services.IClock")
            .uses("App.Modules.UserModule")
            .build(),
        ModuleBuilder::new("App.Modules.UserModule")
            .targets("App.Services.IUserStore")
            .build(),
        Declaration::builder("App.Modules.Broken")
            .annotation(codegen_model::Annotation::new("EffectsModule"))
            .build(),
        runtime("App.AppRuntime", &["App.Modules.EmailModule", "App.Modules.Infra"]),
        runtime("App.BrokenRuntime", &["App.Modules.Broken"]),
        runtime("App.WorkerRuntime", &["App.Modules.UserModule", "App.Modules.Infra"]),
        test_runtime("App.Tests.TestAppRuntime", "App.AppRuntime"),
        test_runtime("App.Tests.TestBrokenRuntime", "App.BrokenRuntime"),
    ])
}
