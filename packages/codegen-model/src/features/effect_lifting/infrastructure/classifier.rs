//! Lifting classifier

use super::super::domain::{Classification, LiftingStrategy, ProducedType, ValueShape};
use super::shape_analyzer::ShapeAnalyzer;
use crate::config::LiftingConfig;
use crate::shared::constants::MSG_UNRESOLVED_WRAPPED_TYPE;
use crate::shared::models::{DeclarationId, GenerationError, MethodDecl, Result, TypeRef};

/// Decides the lifting strategy of a method signature
///
/// | shape                    | strategy              | produced        |
/// |--------------------------|-----------------------|-----------------|
/// | async, no value          | AsyncVoid             | unit            |
/// | async, nullable value    | AsyncNullableToOption | optional(inner) |
/// | async, value             | AsyncValue            | inner           |
/// | sync, void               | SyncVoid              | unit            |
/// | sync, nullable           | SyncNullableToOption  | inner           |
/// | sync, value              | SyncValue             | declared        |
///
/// An async wrapper whose value argument cannot be resolved fails with a
/// resolution error on the owning declaration.
pub struct LiftingClassifier<'a> {
    analyzer: ShapeAnalyzer<'a>,
}

impl<'a> LiftingClassifier<'a> {
    pub fn new(config: &'a LiftingConfig) -> Self {
        Self {
            analyzer: ShapeAnalyzer::new(config),
        }
    }

    /// Classify a declared return type; `owner` is blamed on failure
    pub fn classify(&self, owner: &DeclarationId, declared: &TypeRef) -> Result<Classification> {
        let shape = self.analyzer.analyze(declared);

        let classification = if shape.is_async() {
            match shape.value {
                ValueShape::Void => Classification::new(LiftingStrategy::AsyncVoid, ProducedType::Unit),
                ValueShape::Nullable(inner) => Classification::new(
                    LiftingStrategy::AsyncNullableToOption,
                    ProducedType::Optional(inner),
                ),
                ValueShape::Value(inner) => {
                    Classification::new(LiftingStrategy::AsyncValue, ProducedType::Value(inner))
                }
                ValueShape::Unresolved => {
                    return Err(GenerationError::resolution(
                        owner.clone(),
                        format!("{MSG_UNRESOLVED_WRAPPED_TYPE} (found '{declared}')"),
                    ));
                }
            }
        } else {
            match shape.value {
                ValueShape::Void => Classification::new(LiftingStrategy::SyncVoid, ProducedType::Unit),
                ValueShape::Nullable(inner) => Classification::new(
                    LiftingStrategy::SyncNullableToOption,
                    ProducedType::Value(inner),
                ),
                ValueShape::Value(_) | ValueShape::Unresolved => Classification::new(
                    LiftingStrategy::SyncValue,
                    ProducedType::Value(declared.clone()),
                ),
            }
        };

        tracing::trace!(
            declaration = %owner,
            return_type = %declared,
            strategy = %classification.strategy,
            "classified return type"
        );
        Ok(classification)
    }

    /// Classify a method; the error message names the method
    pub fn classify_method(&self, owner: &DeclarationId, method: &MethodDecl) -> Result<Classification> {
        self.classify(owner, method.return_type().get())
            .map_err(|err| match err {
                GenerationError::Resolution { declaration, message } => {
                    GenerationError::resolution(declaration, format!("method '{}': {message}", method.name))
                }
                other => other,
            })
    }
}
