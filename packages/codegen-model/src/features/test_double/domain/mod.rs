mod models;

pub use models::TestRuntimeModel;
