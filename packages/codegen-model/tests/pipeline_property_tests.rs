//! Property-based tests for classification and aggregation
//!
//! Invariants that hold for all generated inputs:
//! - Totality: every sync/async × void/value/nullable shape classifies
//! - Determinism: two runs over one snapshot are structurally equal
//! - Distinctness: runtime capability interfaces are pairwise distinct
//! - Parity: test runtimes equal their production runtimes

mod common;

use codegen_model::config::LiftingConfig;
use codegen_model::{
    DeclarationId, GenerationPipeline, LiftingClassifier, LiftingStrategy, ProducedType, TypeKind,
    TypeRef,
};
use common::*;
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
enum ValueKind {
    Void,
    Value,
    NullableReference,
    NullableWrapper,
}

fn value_kind() -> impl Strategy<Value = ValueKind> {
    prop_oneof![
        Just(ValueKind::Void),
        Just(ValueKind::Value),
        Just(ValueKind::NullableReference),
        Just(ValueKind::NullableWrapper),
    ]
}

fn type_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}".prop_filter("not a wrapper or void name", |name| {
        !matches!(name.as_str(), "Task" | "Void" | "Nullable")
    })
}

fn value_type(kind: ValueKind, name: &str) -> TypeRef {
    match kind {
        ValueKind::Void => TypeRef::void(),
        ValueKind::Value => TypeRef::class(name),
        ValueKind::NullableReference => TypeRef::class(name).nullable(),
        ValueKind::NullableWrapper => {
            TypeRef::generic("Nullable", TypeKind::Struct, vec![TypeRef::value_type(name)])
        }
    }
}

fn declared(is_async: bool, kind: ValueKind, name: &str) -> TypeRef {
    match (is_async, kind) {
        (true, ValueKind::Void) => task(None),
        (true, kind) => task(Some(value_type(kind, name))),
        (false, kind) => value_type(kind, name),
    }
}

proptest! {
    #[test]
    fn prop_classifier_is_total(is_async in any::<bool>(), kind in value_kind(), name in type_name()) {
        let config = LiftingConfig::default();
        let classifier = LiftingClassifier::new(&config);
        let ty = declared(is_async, kind, &name);

        let classification = classifier.classify(&DeclarationId::new("App.M"), &ty).unwrap();
        prop_assert_eq!(classification.strategy.is_async(), is_async);

        let expected = match (is_async, kind) {
            (true, ValueKind::Void) => LiftingStrategy::AsyncVoid,
            (true, ValueKind::Value) => LiftingStrategy::AsyncValue,
            (true, _) => LiftingStrategy::AsyncNullableToOption,
            (false, ValueKind::Void) => LiftingStrategy::SyncVoid,
            (false, ValueKind::Value) => LiftingStrategy::SyncValue,
            (false, _) => LiftingStrategy::SyncNullableToOption,
        };
        prop_assert_eq!(classification.strategy, expected);
        prop_assert_eq!(classification.produced.is_unit(), expected.is_void());
        prop_assert_eq!(
            matches!(classification.effect_result(), ProducedType::Optional(_)),
            expected.is_nullable()
        );
    }

    #[test]
    fn prop_async_without_wrapped_type_fails(error_argument in any::<bool>(), name in type_name()) {
        let config = LiftingConfig::default();
        let classifier = LiftingClassifier::new(&config);
        let ty = if error_argument {
            task(Some(TypeRef::error(name)))
        } else {
            TypeRef::class("Task").with_arity(1)
        };

        let err = classifier.classify(&DeclarationId::new("App.M"), &ty).unwrap_err();
        prop_assert!(err.is_resolution());
    }

    #[test]
    fn prop_runtime_models_are_deterministic_and_distinct(
        layout in proptest::collection::vec(proptest::collection::vec(0usize..5, 0..4), 1..5),
        references in proptest::collection::vec(0usize..5, 0..8),
    ) {
        let capability_ids: Vec<String> = (0..5).map(|i| format!("App.Services.ICap{i}")).collect();
        let mut declarations: Vec<_> = capability_ids
            .iter()
            .map(|id| capability(id, Vec::new()))
            .collect();

        let module_ids: Vec<String> = (0..layout.len()).map(|i| format!("App.Modules.M{i}")).collect();
        for (id, targets) in module_ids.iter().zip(&layout) {
            let mut module = ModuleBuilder::new(id);
            for &target in targets {
                module = module.targets(&capability_ids[target]);
            }
            // every module needs at least one annotation to be referenceable
            if targets.is_empty() {
                module = module.targets(&capability_ids[0]);
            }
            declarations.push(module.build());
        }

        let used: Vec<&str> = references
            .iter()
            .map(|&i| module_ids[i % module_ids.len()].as_str())
            .collect();
        declarations.push(runtime("App.Root", &used));
        declarations.push(test_runtime("App.Tests.TestRoot", "App.Root"));
        let snapshot = snapshot(declarations);

        let pipeline = GenerationPipeline::with_defaults();
        let first = pipeline.run_to_completion(&snapshot);
        let second = pipeline.run_to_completion(&snapshot);
        prop_assert_eq!(&first, &second);

        let root = first.runtime("App.Root").unwrap();
        let interfaces: HashSet<&str> = root.capabilities.iter().map(|c| c.interface.as_str()).collect();
        prop_assert_eq!(interfaces.len(), root.capabilities.len());

        let mirrored = first.test_runtime("App.Tests.TestRoot").unwrap();
        prop_assert_eq!(&mirrored.capabilities, &root.capabilities);
    }
}
