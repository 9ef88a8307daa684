//! Resolved-runtime lookup port

use rustc_hash::FxHashMap;

use crate::features::capability_aggregation::RuntimeModel;
use crate::features::declaration_result::Maybe;
use crate::shared::models::DeclarationId;

/// Source of already-resolved production runtimes
pub trait RuntimeLookup {
    fn find_runtime(&self, id: &DeclarationId) -> Maybe<&RuntimeModel>;
}

impl RuntimeLookup for [RuntimeModel] {
    fn find_runtime(&self, id: &DeclarationId) -> Maybe<&RuntimeModel> {
        self.iter().find(|r| &r.declaration == id).into()
    }
}

impl RuntimeLookup for Vec<RuntimeModel> {
    fn find_runtime(&self, id: &DeclarationId) -> Maybe<&RuntimeModel> {
        self.as_slice().find_runtime(id)
    }
}

impl RuntimeLookup for FxHashMap<DeclarationId, RuntimeModel> {
    fn find_runtime(&self, id: &DeclarationId) -> Maybe<&RuntimeModel> {
        self.get(id).into()
    }
}
