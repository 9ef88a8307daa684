use serde::{Deserialize, Serialize};

use crate::features::capability_aggregation::CapabilityModel;
use crate::shared::models::{Accessibility, DeclarationId};

/// A test composition root mirroring a production runtime
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestRuntimeModel {
    pub declaration: DeclarationId,
    pub name: String,
    pub namespace: String,
    pub accessibility: Accessibility,
    /// Production runtime being mirrored
    pub production: DeclarationId,
    /// Identical, in identifiers and order, to the production list
    pub capabilities: Vec<CapabilityModel>,
}
