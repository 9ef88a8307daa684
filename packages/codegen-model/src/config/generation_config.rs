//! Generation configuration sections

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::{require_name, require_names, Validatable};
use crate::shared::constants::{
    MODULE_ANNOTATION, RUNTIME_ANNOTATION, TEST_RUNTIME_ANNOTATION, USES_ANNOTATION,
};

/// The only configuration schema version understood
pub const SUPPORTED_VERSION: u32 = 1;

// ============================================================================
// Annotation vocabulary
// ============================================================================

/// Names of the recognized annotations and their named-argument keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationNames {
    /// Capability-module annotation
    pub module: String,
    /// Composition-root marker
    pub runtime: String,
    /// Module-reference annotation (repeatable)
    pub uses: String,
    /// Test composition-root annotation
    pub test_runtime: String,

    /// Display-name override key on the module annotation
    pub name_key: String,
    /// Instrumentation flag key on the module annotation
    pub instrumented_key: String,
    /// Include-only method list key
    pub include_key: String,
    /// Exclude method list key
    pub exclude_key: String,
    /// Named form of a type reference, for hosts without generic annotations
    pub target_key: String,
}

impl Default for AnnotationNames {
    fn default() -> Self {
        Self {
            module: MODULE_ANNOTATION.to_string(),
            runtime: RUNTIME_ANNOTATION.to_string(),
            uses: USES_ANNOTATION.to_string(),
            test_runtime: TEST_RUNTIME_ANNOTATION.to_string(),
            name_key: "name".to_string(),
            instrumented_key: "instrumented".to_string(),
            include_key: "include".to_string(),
            exclude_key: "exclude".to_string(),
            target_key: "target".to_string(),
        }
    }
}

impl Validatable for AnnotationNames {
    fn validate(&self) -> ConfigResult<()> {
        require_name("annotations.module", &self.module)?;
        require_name("annotations.runtime", &self.runtime)?;
        require_name("annotations.uses", &self.uses)?;
        require_name("annotations.test_runtime", &self.test_runtime)?;
        require_name("annotations.name_key", &self.name_key)?;
        require_name("annotations.instrumented_key", &self.instrumented_key)?;
        require_name("annotations.include_key", &self.include_key)?;
        require_name("annotations.exclude_key", &self.exclude_key)?;
        require_name("annotations.target_key", &self.target_key)?;

        let kinds = [&self.module, &self.runtime, &self.uses, &self.test_runtime];
        for (i, a) in kinds.iter().enumerate() {
            if kinds[i + 1..].contains(a) {
                return Err(ConfigError::invalid(
                    "annotations",
                    format!("annotation name '{a}' is used for more than one role"),
                ));
            }
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "AnnotationNames"
    }
}

// ============================================================================
// Lifting rules
// ============================================================================

/// Type shapes the lifting classifier recognizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftingConfig {
    /// Generic types that mark a method asynchronous (`Task`, `Task<T>`)
    pub async_wrappers: Vec<String>,
    /// Generic wrappers that mark a value nullable (`Nullable<T>`)
    pub nullable_wrappers: Vec<String>,
    /// Type names that mean "returns nothing"
    pub void_names: Vec<String>,
    /// Unit type produced by void strategies
    pub unit_type: String,
    /// Optional type produced by nullable strategies
    pub option_type: String,
}

impl Default for LiftingConfig {
    fn default() -> Self {
        Self {
            async_wrappers: vec!["Task".to_string(), "ValueTask".to_string()],
            nullable_wrappers: vec!["Nullable".to_string()],
            void_names: vec!["void".to_string(), "Void".to_string()],
            unit_type: "Unit".to_string(),
            option_type: "Option".to_string(),
        }
    }
}

impl LiftingConfig {
    pub fn is_async_wrapper(&self, name: &str) -> bool {
        self.async_wrappers.iter().any(|w| w == name)
    }

    pub fn is_nullable_wrapper(&self, name: &str) -> bool {
        self.nullable_wrappers.iter().any(|w| w == name)
    }

    pub fn is_void_name(&self, name: &str) -> bool {
        self.void_names.iter().any(|v| v == name)
    }
}

impl Validatable for LiftingConfig {
    fn validate(&self) -> ConfigResult<()> {
        require_names("lifting.async_wrappers", &self.async_wrappers)?;
        require_names("lifting.void_names", &self.void_names)?;
        // nullable wrappers may be empty: nullability can come from the marker alone
        if let Some(i) = self.nullable_wrappers.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "lifting.nullable_wrappers",
                format!("entry {i} is blank"),
            ));
        }
        require_name("lifting.unit_type", &self.unit_type)?;
        require_name("lifting.option_type", &self.option_type)?;

        if let Some(shared) = self
            .async_wrappers
            .iter()
            .find(|w| self.nullable_wrappers.contains(*w))
        {
            return Err(ConfigError::invalid(
                "lifting",
                format!("'{shared}' cannot be both an async and a nullable wrapper"),
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "LiftingConfig"
    }
}

// ============================================================================
// Naming conventions
// ============================================================================

/// Identifier derivation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Conventional interface prefix character
    pub interface_prefix: char,
    /// Prefix of derived capability interfaces
    pub capability_prefix: String,
    /// Drop the `Async` suffix from effect names of async methods
    pub strip_async_suffix: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            interface_prefix: 'I',
            capability_prefix: "IHas".to_string(),
            strip_async_suffix: true,
        }
    }
}

impl Validatable for NamingConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !self.interface_prefix.is_alphabetic() {
            return Err(ConfigError::invalid(
                "naming.interface_prefix",
                format!("'{}' is not a letter", self.interface_prefix),
            ));
        }
        require_name("naming.capability_prefix", &self.capability_prefix)?;
        if self.capability_prefix.chars().any(|c| !c.is_alphanumeric() && c != '_') {
            return Err(ConfigError::invalid(
                "naming.capability_prefix",
                "must be a valid identifier prefix",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "NamingConfig"
    }
}

// ============================================================================
// Persistence-context shape
// ============================================================================

/// Structural rules for persistence-context detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Base types that make a target a persistence context
    pub context_types: Vec<String>,
    /// Single-argument generic types that form a named record collection
    pub collection_types: Vec<String>,
    /// Maximum ancestor levels walked (1..=64)
    pub ancestor_depth_limit: usize,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            context_types: vec!["DbContext".to_string()],
            collection_types: vec!["DbSet".to_string()],
            ancestor_depth_limit: 16,
        }
    }
}

impl PersistenceConfig {
    pub fn is_context_type(&self, name: &str) -> bool {
        self.context_types.iter().any(|c| c == name)
    }

    pub fn is_collection_type(&self, name: &str) -> bool {
        self.collection_types.iter().any(|c| c == name)
    }
}

impl Validatable for PersistenceConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.ancestor_depth_limit == 0 || self.ancestor_depth_limit > 64 {
            return Err(ConfigError::range_with_hint(
                "ancestor_depth_limit",
                self.ancestor_depth_limit,
                1,
                64,
                "Ancestor walk must visit at least the direct base type",
            ));
        }
        require_names("persistence.context_types", &self.context_types)?;
        require_names("persistence.collection_types", &self.collection_types)?;
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "PersistenceConfig"
    }
}

// ============================================================================
// Top-level configuration
// ============================================================================

/// Complete generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Schema version (always 1)
    pub version: u32,
    pub annotations: AnnotationNames,
    pub lifting: LiftingConfig,
    pub naming: NamingConfig,
    pub persistence: PersistenceConfig,
    /// Build modules and runtimes on the rayon pool
    pub parallel: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            annotations: AnnotationNames::default(),
            lifting: LiftingConfig::default(),
            naming: NamingConfig::default(),
            persistence: PersistenceConfig::default(),
            parallel: true,
        }
    }
}

impl GenerationConfig {
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn annotations(mut self, f: impl FnOnce(&mut AnnotationNames)) -> Self {
        f(&mut self.annotations);
        self
    }

    pub fn lifting(mut self, f: impl FnOnce(&mut LiftingConfig)) -> Self {
        f(&mut self.lifting);
        self
    }

    pub fn naming(mut self, f: impl FnOnce(&mut NamingConfig)) -> Self {
        f(&mut self.naming);
        self
    }

    pub fn persistence(mut self, f: impl FnOnce(&mut PersistenceConfig)) -> Self {
        f(&mut self.persistence);
        self
    }

    /// Validate every section and freeze the configuration
    pub fn validated(self) -> ConfigResult<ValidatedConfig> {
        self.validate()?;
        Ok(ValidatedConfig(self))
    }
}

impl Validatable for GenerationConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.version != SUPPORTED_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: vec![SUPPORTED_VERSION],
            });
        }
        self.annotations.validate()?;
        self.lifting.validate()?;
        self.naming.validate()?;
        self.persistence.validate()?;
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "GenerationConfig"
    }
}

/// Configuration that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig(GenerationConfig);

impl ValidatedConfig {
    pub fn into_inner(self) -> GenerationConfig {
        self.0
    }

    pub fn as_inner(&self) -> &GenerationConfig {
        &self.0
    }

    pub fn annotations(&self) -> &AnnotationNames {
        &self.0.annotations
    }

    pub fn lifting(&self) -> &LiftingConfig {
        &self.0.lifting
    }

    pub fn naming(&self) -> &NamingConfig {
        &self.0.naming
    }

    pub fn persistence(&self) -> &PersistenceConfig {
        &self.0.persistence
    }

    pub fn parallel(&self) -> bool {
        self.0.parallel
    }
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self(GenerationConfig::default())
    }
}
