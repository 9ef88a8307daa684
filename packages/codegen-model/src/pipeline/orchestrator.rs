//! Generation pipeline
//!
//! Three stages, each a pure map over the declarations it applies to:
//! 1. module models for every module-annotated declaration
//! 2. runtime models for every composition root
//! 3. test runtime models, mirrored from the runtimes of stage 2
//!
//! With `parallel` on, each stage runs on the rayon pool. Indexed parallel
//! collection keeps declaration order, so output never depends on
//! completion order.

use std::time::Instant;

use rayon::prelude::*;

use super::cancellation::CancellationToken;
use super::error::Cancelled;
use super::result::{DeclarationFailure, GenerationOutput, Stage};
use crate::config::ValidatedConfig;
use crate::features::capability_aggregation::{CapabilityAggregator, RuntimeModel};
use crate::features::module_model::{ModuleModel, ModuleModelBuilder};
use crate::features::test_double::{TestDoubleMirror, TestRuntimeModel};
use crate::shared::models::{Declaration, DeclarationId, GenerationError, Result};
use crate::shared::ports::DeclarationHost;

type Outcomes<'d, T> = Vec<(&'d Declaration, Result<T>)>;

pub struct GenerationPipeline {
    config: ValidatedConfig,
}

impl GenerationPipeline {
    pub fn new(config: ValidatedConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ValidatedConfig::default())
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Run every stage over the snapshot
    ///
    /// Returns `Err(Cancelled)` if the token fires at any checkpoint; model
    /// errors never abort the run and are reported in `failures`.
    pub fn run(
        &self,
        host: &dyn DeclarationHost,
        cancel: &CancellationToken,
    ) -> std::result::Result<GenerationOutput, Cancelled> {
        let start = Instant::now();
        let modules = ModuleModelBuilder::new(host, &self.config);
        let aggregator = CapabilityAggregator::new(host, &self.config);
        let mirror = TestDoubleMirror::new(host, &self.config);
        let declarations = host.declarations();

        let mut output = GenerationOutput::default();

        let module_decls: Vec<&Declaration> =
            declarations.iter().filter(|d| modules.is_module(d)).collect();
        let built = self.map_declarations(&module_decls, cancel, |d| modules.build_all(d))?;
        for (declaration, result) in built {
            match result {
                Ok(models) => output.modules.extend(models),
                Err(error) => record(&mut output, declaration, Stage::Module, error),
            }
        }

        let runtime_decls: Vec<&Declaration> =
            declarations.iter().filter(|d| aggregator.is_runtime(d)).collect();
        let built = self.map_declarations(&runtime_decls, cancel, |d| aggregator.aggregate(d))?;
        for (declaration, result) in built {
            match result {
                Ok(runtime) => output.runtimes.push(runtime),
                Err(error) => record(&mut output, declaration, Stage::Runtime, error),
            }
        }

        let test_decls: Vec<&Declaration> =
            declarations.iter().filter(|d| mirror.is_test_runtime(d)).collect();
        let runtimes = output.runtimes.as_slice();
        let built = self.map_declarations(&test_decls, cancel, |d| mirror.mirror(d, runtimes))?;
        for (declaration, result) in built {
            match result {
                Ok(test_runtime) => output.test_runtimes.push(test_runtime),
                Err(error) => record(&mut output, declaration, Stage::TestRuntime, error),
            }
        }

        tracing::info!(
            declarations = declarations.len(),
            modules = output.modules.len(),
            runtimes = output.runtimes.len(),
            test_runtimes = output.test_runtimes.len(),
            failures = output.failures.len(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "generation cycle complete"
        );
        Ok(output)
    }

    /// Run without a cancellation source
    pub fn run_to_completion(&self, host: &dyn DeclarationHost) -> GenerationOutput {
        // a fresh token is never cancelled
        self.run(host, &CancellationToken::new()).unwrap_or_default()
    }

    /// Module models of a single declaration
    pub fn build_modules(&self, host: &dyn DeclarationHost, declaration: &Declaration) -> Result<Vec<ModuleModel>> {
        ModuleModelBuilder::new(host, &self.config).build_all(declaration)
    }

    /// Runtime model of a single composition root, by identity
    ///
    /// Safe to call concurrently for disjoint roots over the same snapshot.
    pub fn runtime_for(&self, host: &dyn DeclarationHost, root: &DeclarationId) -> Result<RuntimeModel> {
        let declaration = host
            .lookup(root)
            .or_configuration_error(root, "declaration is not part of the snapshot")?;
        CapabilityAggregator::new(host, &self.config).aggregate(declaration)
    }

    /// Test runtime model of a single test root, resolving its production root first
    pub fn test_runtime_for(&self, host: &dyn DeclarationHost, test_root: &DeclarationId) -> Result<TestRuntimeModel> {
        let declaration = host
            .lookup(test_root)
            .or_configuration_error(test_root, "declaration is not part of the snapshot")?;
        let mirror = TestDoubleMirror::new(host, &self.config);
        let production = self.runtime_for(host, &mirror.production_of(declaration)?)?;
        mirror.mirror(declaration, std::slice::from_ref(&production))
    }

    fn map_declarations<'d, T, F>(
        &self,
        declarations: &[&'d Declaration],
        cancel: &CancellationToken,
        build: F,
    ) -> std::result::Result<Outcomes<'d, T>, Cancelled>
    where
        T: Send,
        F: Fn(&Declaration) -> Result<T> + Sync + Send,
    {
        let run = |declaration: &&'d Declaration| -> std::result::Result<(&'d Declaration, Result<T>), Cancelled> {
            cancel.check()?;
            Ok((*declaration, build(*declaration)))
        };

        if self.config.parallel() {
            declarations.par_iter().map(run).collect()
        } else {
            declarations.iter().map(run).collect()
        }
    }
}

fn record(output: &mut GenerationOutput, declaration: &Declaration, stage: Stage, error: GenerationError) {
    tracing::warn!(
        declaration = %declaration.id,
        stage = ?stage,
        kind = %error.kind(),
        "{}",
        error.message()
    );
    output.failures.push(DeclarationFailure {
        declaration: declaration.id.clone(),
        stage,
        error,
    });
}
