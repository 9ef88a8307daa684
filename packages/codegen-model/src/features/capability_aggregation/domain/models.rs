//! Capability and runtime models

use serde::{Deserialize, Serialize};

use crate::features::module_model::ModuleModel;
use crate::shared::models::{Accessibility, DeclarationId, TypeRef};

/// One resolved dependency slot on a composition root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityModel {
    /// Capability interface, e.g. `IHasEmailService`
    pub interface: String,
    pub property_name: String,
    pub parameter_name: String,
    pub dependency_type: TypeRef,
}

impl CapabilityModel {
    pub fn from_module(module: &ModuleModel) -> Self {
        Self {
            interface: module.identifiers.interface_name.clone(),
            property_name: module.identifiers.property_name.clone(),
            parameter_name: module.identifiers.parameter_name.clone(),
            dependency_type: module.target_type.clone(),
        }
    }

    /// Identity of the dependency behind the interface
    pub fn dependency_identity(&self) -> String {
        self.dependency_type.identity()
    }
}

/// A composition root with its flattened capabilities
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuntimeModel {
    pub declaration: DeclarationId,
    pub name: String,
    pub namespace: String,
    pub accessibility: Accessibility,
    /// First-discovery order; interfaces are pairwise distinct
    pub capabilities: Vec<CapabilityModel>,
}

impl RuntimeModel {
    pub fn capability(&self, interface: &str) -> Option<&CapabilityModel> {
        self.capabilities.iter().find(|c| c.interface == interface)
    }

    pub fn interfaces(&self) -> Vec<&str> {
        self.capabilities.iter().map(|c| c.interface.as_str()).collect()
    }
}
