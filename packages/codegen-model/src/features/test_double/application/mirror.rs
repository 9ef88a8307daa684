//! Test runtime mirroring

use super::super::domain::TestRuntimeModel;
use super::super::ports::RuntimeLookup;
use crate::config::ValidatedConfig;
use crate::features::annotation_query::AnnotationQuery;
use crate::shared::constants::MSG_INVALID_TEST_RUNTIME;
use crate::shared::models::{Declaration, DeclarationId, Result, TypeRef};
use crate::shared::ports::DeclarationHost;

pub struct TestDoubleMirror<'a> {
    host: &'a dyn DeclarationHost,
    config: &'a ValidatedConfig,
}

impl<'a> TestDoubleMirror<'a> {
    pub fn new(host: &'a dyn DeclarationHost, config: &'a ValidatedConfig) -> Self {
        Self { host, config }
    }

    pub fn is_test_runtime(&self, declaration: &Declaration) -> bool {
        declaration.has_annotation(&self.config.annotations().test_runtime)
    }

    /// Production runtime named by the test-runtime annotation
    ///
    /// Resolved through the host like module references, so a stale symbol
    /// falls back to the qualified name.
    pub fn production_of(&self, test_root: &Declaration) -> Result<DeclarationId> {
        let keys = self.config.annotations();
        let query = AnnotationQuery::single(test_root, &keys.test_runtime)?
            .or_configuration_error(&test_root.id, MSG_INVALID_TEST_RUNTIME)?;
        let production: TypeRef = query
            .type_reference(&keys.target_key)
            .filter(|ty| !ty.is_error())
            .or_configuration_error(&test_root.id, MSG_INVALID_TEST_RUNTIME)?;

        let declaration = self.host.resolve_type(&production).or_configuration_error(
            &test_root.id,
            format!("{MSG_INVALID_TEST_RUNTIME} ('{production}' does not resolve)"),
        )?;
        Ok(declaration.id.clone())
    }

    /// Copy the production capability list into a test runtime model
    pub fn mirror<R>(&self, test_root: &Declaration, runtimes: &R) -> Result<TestRuntimeModel>
    where
        R: RuntimeLookup + ?Sized,
    {
        let production_id = self.production_of(test_root)?;
        let production = runtimes.find_runtime(&production_id).or_configuration_error(
            &test_root.id,
            format!("{MSG_INVALID_TEST_RUNTIME} ('{production_id}' was not resolved)"),
        )?;

        let model = TestRuntimeModel {
            declaration: test_root.id.clone(),
            name: test_root.name.clone(),
            namespace: test_root.namespace.clone(),
            accessibility: test_root.accessibility,
            production: production.declaration.clone(),
            capabilities: production.capabilities.clone(),
        };

        tracing::debug!(
            test_runtime = %model.declaration,
            production = %model.production,
            capabilities = model.capabilities.len(),
            "mirrored test runtime"
        );
        Ok(model)
    }
}
