/*
 * Codegen Model - Semantic model engine for effect/capability code generation
 *
 * Feature-First Hexagonal Architecture:
 * - shared/          : Declaration snapshot models, error taxonomy, host port
 * - features/        : Vertical slices (result wrapper → annotation query →
 *                      lifting classifier → module model → aggregation → test double)
 * - config/          : Generation configuration (YAML, validation)
 * - infrastructure/  : In-memory declaration snapshot host
 * - pipeline/        : Whole-snapshot orchestration
 *
 * Every model is built once from an immutable snapshot and compares
 * structurally, so hosts can memoize any stage on value equality.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (one per modeling stage)
pub mod features;

/// Configuration system
pub mod config;

/// Host implementations of the declaration port
pub mod infrastructure;

/// Pipeline orchestration
pub mod pipeline;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, GenerationConfig, ValidatedConfig};
pub use features::annotation_query::{AnnotationQuery, FromAnnotationValue};
pub use features::capability_aggregation::{CapabilityAggregator, CapabilityModel, RuntimeModel};
pub use features::declaration_result::{Guaranteed, IntoMaybe, Maybe};
pub use features::effect_lifting::{Classification, LiftingClassifier, LiftingStrategy, ProducedType};
pub use features::module_model::{EffectMethodModel, ModuleModel, ModuleModelBuilder};
pub use features::test_double::{RuntimeLookup, TestDoubleMirror, TestRuntimeModel};
pub use infrastructure::{DeclarationSnapshot, SnapshotError};
pub use pipeline::{CancellationToken, Cancelled, GenerationOutput, GenerationPipeline};
pub use shared::models::{
    Accessibility, Annotation, AnnotationValue, Declaration, DeclarationId, DeclarationKind,
    ErrorKind, GenerationError, MethodDecl, Parameter, PropertyDecl, Result, TypeKind, TypeRef,
};
pub use shared::ports::DeclarationHost;
