mod models;

pub use models::{CapabilityModel, RuntimeModel};
