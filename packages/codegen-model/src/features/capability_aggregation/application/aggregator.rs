//! Composition-root aggregation
//!
//! The walk keeps a stack of declarations being expanded (cycle detection)
//! and a set of declarations already fully expanded (absorbed revisits).
//! Capabilities are appended in discovery order; the interface index is only
//! consulted for membership, never iterated.

use rustc_hash::{FxHashMap, FxHashSet};

use super::super::domain::{CapabilityModel, RuntimeModel};
use crate::config::ValidatedConfig;
use crate::features::annotation_query::AnnotationQuery;
use crate::features::module_model::ModuleModelBuilder;
use crate::shared::constants::{
    MSG_CIRCULAR_REFERENCE, MSG_INVALID_MODULE_REFERENCE, MSG_NOT_A_RUNTIME,
};
use crate::shared::models::{Declaration, DeclarationId, GenerationError, Result};
use crate::shared::ports::DeclarationHost;

/// Mutable state of one aggregation walk
struct Walk {
    root: DeclarationId,
    capabilities: Vec<CapabilityModel>,
    /// interface -> dependency identity of its first occurrence
    interfaces: FxHashMap<String, String>,
    walk_stack: Vec<DeclarationId>,
    expanded: FxHashSet<DeclarationId>,
}

impl Walk {
    fn new(root: &Declaration) -> Self {
        Self {
            root: root.id.clone(),
            capabilities: Vec::new(),
            interfaces: FxHashMap::default(),
            walk_stack: vec![root.id.clone()],
            expanded: FxHashSet::default(),
        }
    }

    fn is_circular(&self, id: &DeclarationId) -> bool {
        self.walk_stack.contains(id)
    }

    fn cycle_path(&self, closing: &DeclarationId) -> String {
        let start = self
            .walk_stack
            .iter()
            .position(|id| id == closing)
            .unwrap_or(0);
        self.walk_stack[start..]
            .iter()
            .chain(std::iter::once(closing))
            .map(DeclarationId::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// First occurrence wins; the same interface over a different dependency
    /// is a naming collision
    fn append(&mut self, capability: CapabilityModel) -> Result<()> {
        let identity = capability.dependency_identity();
        match self.interfaces.get(&capability.interface) {
            Some(existing) if *existing == identity => {
                tracing::trace!(
                    runtime = %self.root,
                    interface = %capability.interface,
                    "duplicate capability absorbed"
                );
                Ok(())
            }
            Some(existing) => Err(GenerationError::resolution(
                self.root.clone(),
                format!(
                    "capability interface '{}' is produced by two different target types: '{}' and '{}'",
                    capability.interface, existing, identity
                ),
            )),
            None => {
                self.interfaces.insert(capability.interface.clone(), identity);
                self.capabilities.push(capability);
                Ok(())
            }
        }
    }
}

/// Resolves composition roots into runtime models
pub struct CapabilityAggregator<'a> {
    host: &'a dyn DeclarationHost,
    config: &'a ValidatedConfig,
    modules: ModuleModelBuilder<'a>,
}

impl<'a> CapabilityAggregator<'a> {
    pub fn new(host: &'a dyn DeclarationHost, config: &'a ValidatedConfig) -> Self {
        Self {
            host,
            config,
            modules: ModuleModelBuilder::new(host, config),
        }
    }

    pub fn is_runtime(&self, declaration: &Declaration) -> bool {
        declaration.has_annotation(&self.config.annotations().runtime)
    }

    /// Aggregate the capabilities of a composition root
    pub fn aggregate(&self, root: &Declaration) -> Result<RuntimeModel> {
        if !self.is_runtime(root) {
            return Err(GenerationError::configuration(root.id.clone(), MSG_NOT_A_RUNTIME));
        }

        let mut walk = Walk::new(root);
        self.expand_references(root, &mut walk)?;

        let runtime = RuntimeModel {
            declaration: root.id.clone(),
            name: root.name.clone(),
            namespace: root.namespace.clone(),
            accessibility: root.accessibility,
            capabilities: walk.capabilities,
        };

        tracing::debug!(
            runtime = %runtime.declaration,
            capabilities = runtime.capabilities.len(),
            "aggregated runtime"
        );
        Ok(runtime)
    }

    /// Follow every module reference of `declaration`, in annotation order
    fn expand_references(&self, declaration: &Declaration, walk: &mut Walk) -> Result<()> {
        let keys = self.config.annotations();
        for query in AnnotationQuery::all(declaration, &keys.uses) {
            let reference = query
                .type_reference(&keys.target_key)
                .filter(|ty| !ty.is_error())
                .or_configuration_error(&declaration.id, MSG_INVALID_MODULE_REFERENCE)?;
            let referenced = self.host.resolve_type(&reference).or_configuration_error(
                &declaration.id,
                format!("{MSG_INVALID_MODULE_REFERENCE} ('{reference}' does not resolve)"),
            )?;
            self.visit(referenced, walk)?;
        }
        Ok(())
    }

    /// Own modules first, then nested references, depth-first
    fn visit(&self, declaration: &Declaration, walk: &mut Walk) -> Result<()> {
        if walk.expanded.contains(&declaration.id) {
            return Ok(());
        }
        if walk.is_circular(&declaration.id) {
            return Err(GenerationError::resolution(
                walk.root.clone(),
                format!("{MSG_CIRCULAR_REFERENCE}: {}", walk.cycle_path(&declaration.id)),
            ));
        }

        let has_references = declaration.has_annotation(&self.config.annotations().uses);
        if !self.modules.is_module(declaration) && !has_references {
            return Err(GenerationError::configuration(
                walk.root.clone(),
                format!(
                    "{MSG_INVALID_MODULE_REFERENCE} ('{}' declares no modules)",
                    declaration.id
                ),
            ));
        }

        walk.walk_stack.push(declaration.id.clone());
        for module in self.modules.build_all(declaration)? {
            walk.append(CapabilityModel::from_module(&module))?;
        }
        self.expand_references(declaration, walk)?;
        walk.walk_stack.pop();
        walk.expanded.insert(declaration.id.clone());
        Ok(())
    }
}
