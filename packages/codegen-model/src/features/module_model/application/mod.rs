mod builder;

pub use builder::ModuleModelBuilder;
