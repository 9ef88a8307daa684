//! Module model construction

use rustc_hash::FxHashMap;

use super::super::domain::{CapabilityIdentifiers, EffectMethodModel, ModuleModel, ParameterModel};
use super::super::infrastructure::{MethodFilter, PersistenceDetector};
use crate::config::ValidatedConfig;
use crate::features::annotation_query::AnnotationQuery;
use crate::features::effect_lifting::LiftingClassifier;
use crate::shared::constants::{ASYNC_METHOD_SUFFIX, MSG_INVALID_TARGET_TYPE};
use crate::shared::models::{
    Accessibility, Declaration, DeclarationKind, GenerationError, MethodDecl, Result,
};
use crate::shared::ports::DeclarationHost;
use crate::shared::utils::naming::{
    camel_case, capability_interface_name, strip_async_suffix, strip_interface_prefix,
};

/// Builds module models from capability-module annotations
pub struct ModuleModelBuilder<'a> {
    host: &'a dyn DeclarationHost,
    config: &'a ValidatedConfig,
    classifier: LiftingClassifier<'a>,
}

impl<'a> ModuleModelBuilder<'a> {
    pub fn new(host: &'a dyn DeclarationHost, config: &'a ValidatedConfig) -> Self {
        Self {
            host,
            config,
            classifier: LiftingClassifier::new(config.lifting()),
        }
    }

    /// One model per module annotation on `declaration`, in annotation order
    ///
    /// The first failing annotation aborts the declaration; no partial list
    /// is returned.
    pub fn build_all(&self, declaration: &Declaration) -> Result<Vec<ModuleModel>> {
        AnnotationQuery::all(declaration, &self.config.annotations().module)
            .into_iter()
            .map(|query| self.build(query))
            .collect()
    }

    pub fn is_module(&self, declaration: &Declaration) -> bool {
        declaration.has_annotation(&self.config.annotations().module)
    }

    /// Build the model for a single module annotation
    pub fn build(&self, query: AnnotationQuery<'_>) -> Result<ModuleModel> {
        let keys = self.config.annotations();
        let naming = self.config.naming();
        let container = query.declaration().into_inner();

        let target_type = query
            .type_reference(&keys.target_key)
            .filter(|ty| !ty.is_error())
            .or_configuration_error(&container.id, MSG_INVALID_TARGET_TYPE)?;
        let target = self
            .host
            .resolve_type(&target_type)
            .filter(|decl| decl.kind != DeclarationKind::Enum)
            .or_configuration_error(
                &container.id,
                format!("{MSG_INVALID_TARGET_TYPE} ('{target_type}' does not resolve)"),
            )?;

        let property_name =
            strip_interface_prefix(&target.name, target.is_interface(), naming.interface_prefix)
                .trim()
                .to_string();
        if property_name.is_empty() {
            return Err(GenerationError::configuration(
                container.id.clone(),
                format!("{MSG_INVALID_TARGET_TYPE} ('{}' has no usable name)", target.id),
            ));
        }
        let identifiers = CapabilityIdentifiers {
            interface_name: capability_interface_name(&naming.capability_prefix, &property_name),
            parameter_name: camel_case(&property_name),
            property_name,
        };
        let name = query
            .named_arg::<String>(&keys.name_key)
            .filter(|n| !n.trim().is_empty())
            .or_default_with(|| identifiers.property_name.clone());

        let filter = MethodFilter::new(
            query.named_arg(&keys.include_key).or_default_with(Vec::new),
            query.named_arg(&keys.exclude_key).or_default_with(Vec::new),
        );
        let methods = self.effect_methods(container, target, &filter)?;

        let detector = PersistenceDetector::new(self.host, self.config.persistence());
        let is_persistence_context = detector.is_context(target);
        let record_collections = if is_persistence_context {
            detector.record_collections(target)
        } else {
            Vec::new()
        };

        let model = ModuleModel {
            name,
            container: container.id.clone(),
            container_name: container.name.clone(),
            container_namespace: container.namespace.clone(),
            container_accessibility: container.accessibility,
            target_type: target.as_type_ref(),
            target: target.id.clone(),
            identifiers,
            methods,
            instrumented: query.named_arg(&keys.instrumented_key).or_default(true),
            is_persistence_context,
            record_collections,
        };

        tracing::debug!(
            module = %model.container,
            target = %model.target,
            name = %model.name,
            methods = model.methods.len(),
            persistence = model.is_persistence_context,
            "built module model"
        );
        Ok(model)
    }

    fn effect_methods(
        &self,
        container: &Declaration,
        target: &Declaration,
        filter: &MethodFilter,
    ) -> Result<Vec<EffectMethodModel>> {
        let lifting = self.config.lifting();
        let mut methods = target
            .instance_methods()
            .filter(|m| m.accessibility == Accessibility::Public)
            .filter(|m| filter.keeps(&m.name))
            .map(|method| -> Result<EffectMethodModel> {
                let classification = self.classifier.classify_method(&container.id, method)?;
                Ok(EffectMethodModel {
                    effect_name: self.effect_name(method, classification.strategy.is_async()),
                    source_name: method.name.clone(),
                    strategy: classification.strategy,
                    produced_type: classification.produced.render(lifting),
                    result_type: classification.effect_result().render(lifting),
                    produced: classification.produced,
                    parameters: parameter_models(method),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        restore_colliding_names(&mut methods);
        Ok(methods)
    }

    fn effect_name(&self, method: &MethodDecl, is_async: bool) -> String {
        if is_async && self.config.naming().strip_async_suffix {
            strip_async_suffix(&method.name, ASYNC_METHOD_SUFFIX).to_string()
        } else {
            method.name.clone()
        }
    }
}

fn parameter_models(method: &MethodDecl) -> Vec<ParameterModel> {
    method
        .parameters
        .iter()
        .map(|p| ParameterModel {
            name: p.name.clone(),
            ty: p.ty.display(),
            type_ref: p.ty.clone(),
            default: p.default.clone(),
        })
        .collect()
}

/// Renamed effects that would collide fall back to their source names
///
/// Restoring one name can create a new clash with another renamed effect,
/// so passes repeat until nothing changes. Each pass restores at least one
/// renamed effect, which bounds the loop by the method count.
fn restore_colliding_names(methods: &mut [EffectMethodModel]) {
    loop {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for method in methods.iter() {
            *counts.entry(method.effect_name.clone()).or_default() += 1;
        }

        let mut restored = false;
        for method in methods.iter_mut() {
            let collides = counts.get(&method.effect_name).is_some_and(|&n| n > 1);
            if collides && method.is_renamed() {
                method.effect_name = method.source_name.clone();
                restored = true;
            }
        }
        if !restored {
            return;
        }
    }
}
