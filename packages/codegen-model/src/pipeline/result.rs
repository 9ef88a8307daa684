//! Pipeline output

use serde::{Deserialize, Serialize};

use crate::features::capability_aggregation::RuntimeModel;
use crate::features::module_model::ModuleModel;
use crate::features::test_double::TestRuntimeModel;
use crate::shared::models::{DeclarationId, GenerationError};

/// Modeling stage a failure occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Module,
    Runtime,
    TestRuntime,
}

/// A declaration whose model could not be built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationFailure {
    pub declaration: DeclarationId,
    pub stage: Stage,
    pub error: GenerationError,
}

/// Models of one generation cycle, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutput {
    pub modules: Vec<ModuleModel>,
    pub runtimes: Vec<RuntimeModel>,
    pub test_runtimes: Vec<TestRuntimeModel>,
    pub failures: Vec<DeclarationFailure>,
}

impl GenerationOutput {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn runtime(&self, id: &str) -> Option<&RuntimeModel> {
        self.runtimes.iter().find(|r| r.declaration.as_str() == id)
    }

    pub fn test_runtime(&self, id: &str) -> Option<&TestRuntimeModel> {
        self.test_runtimes.iter().find(|r| r.declaration.as_str() == id)
    }

    /// Module models declared on `container`, in annotation order
    pub fn modules_of<'a>(&'a self, container: &'a str) -> impl Iterator<Item = &'a ModuleModel> + 'a {
        self.modules.iter().filter(move |m| m.container.as_str() == container)
    }

    pub fn failure(&self, id: &str) -> Option<&DeclarationFailure> {
        self.failures.iter().find(|f| f.declaration.as_str() == id)
    }

    /// JSON export for external writers and value-equality cache keys
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
