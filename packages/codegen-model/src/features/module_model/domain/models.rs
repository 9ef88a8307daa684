//! Module model types
//!
//! Built once per capability annotation and never mutated. Every type
//! compares structurally so a host can memoize on value equality.

use serde::{Deserialize, Serialize};

use crate::features::effect_lifting::{LiftingStrategy, ProducedType};
use crate::shared::models::{Accessibility, DeclarationId, TypeRef};

/// One parameter of an effect method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterModel {
    pub name: String,
    /// Rendered type expression
    pub ty: String,
    pub type_ref: TypeRef,
    /// Default value expression, verbatim
    pub default: Option<String>,
}

/// One exposed method of a capability
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectMethodModel {
    /// Name of the generated effect (possibly renamed)
    pub effect_name: String,
    /// Method name on the target type
    pub source_name: String,
    pub strategy: LiftingStrategy,
    pub produced: ProducedType,
    /// Rendered produced type, e.g. `Unit` or `bool`
    pub produced_type: String,
    /// Rendered type the effect yields, e.g. `Option<User>`
    pub result_type: String,
    pub parameters: Vec<ParameterModel>,
}

impl EffectMethodModel {
    pub fn effect_result(&self) -> &str {
        &self.result_type
    }

    pub fn is_renamed(&self) -> bool {
        self.effect_name != self.source_name
    }
}

/// Named record collection exposed by a persistence context
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordCollectionModel {
    pub property_name: String,
    pub element_type: TypeRef,
}

/// Identifiers a composition root uses for one capability
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityIdentifiers {
    /// e.g. `IHasEmailService`
    pub interface_name: String,
    /// e.g. `EmailService`
    pub property_name: String,
    /// e.g. `emailService`
    pub parameter_name: String,
}

/// One capability declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleModel {
    /// Display name; never empty
    pub name: String,
    /// Declaration carrying the module annotation
    pub container: DeclarationId,
    pub container_name: String,
    pub container_namespace: String,
    pub container_accessibility: Accessibility,
    pub target_type: TypeRef,
    pub target: DeclarationId,
    pub identifiers: CapabilityIdentifiers,
    pub methods: Vec<EffectMethodModel>,
    pub instrumented: bool,
    pub is_persistence_context: bool,
    pub record_collections: Vec<RecordCollectionModel>,
}

impl ModuleModel {
    pub fn method(&self, effect_name: &str) -> Option<&EffectMethodModel> {
        self.methods.iter().find(|m| m.effect_name == effect_name)
    }

    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.source_name.as_str()).collect()
    }
}
