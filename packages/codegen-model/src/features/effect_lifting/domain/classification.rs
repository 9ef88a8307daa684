//! Classification result

use serde::{Deserialize, Serialize};

use super::strategy::LiftingStrategy;
use crate::config::LiftingConfig;
use crate::shared::models::{TypeKind, TypeRef};

/// Normalized type an effect produces
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", content = "type", rename_all = "snake_case")]
pub enum ProducedType {
    Unit,
    Value(TypeRef),
    /// Optional of the inner type
    Optional(TypeRef),
}

impl ProducedType {
    pub fn is_unit(&self) -> bool {
        matches!(self, ProducedType::Unit)
    }

    /// Type reference in the configured vocabulary
    pub fn to_type_ref(&self, lifting: &LiftingConfig) -> TypeRef {
        match self {
            ProducedType::Unit => TypeRef::value_type(lifting.unit_type.clone()),
            ProducedType::Value(ty) => ty.clone(),
            ProducedType::Optional(inner) => TypeRef::generic(
                lifting.option_type.clone(),
                TypeKind::Struct,
                vec![inner.clone()],
            ),
        }
    }

    /// Rendered type expression, e.g. `Unit`, `bool`, `Option<User>`
    pub fn render(&self, lifting: &LiftingConfig) -> String {
        self.to_type_ref(lifting).display()
    }
}

/// Outcome of classifying one return type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub strategy: LiftingStrategy,
    pub produced: ProducedType,
}

impl Classification {
    pub fn new(strategy: LiftingStrategy, produced: ProducedType) -> Self {
        Self { strategy, produced }
    }

    /// Type the generated effect yields
    ///
    /// Both nullable strategies yield an optional of the inner type, even
    /// though the synchronous one produces the bare inner type.
    pub fn effect_result(&self) -> ProducedType {
        match (&self.produced, self.strategy.is_nullable()) {
            (ProducedType::Value(inner), true) => ProducedType::Optional(inner.clone()),
            (produced, _) => produced.clone(),
        }
    }
}
