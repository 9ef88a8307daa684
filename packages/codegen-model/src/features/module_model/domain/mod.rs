mod models;

pub use models::{
    CapabilityIdentifiers, EffectMethodModel, ModuleModel, ParameterModel, RecordCollectionModel,
};
