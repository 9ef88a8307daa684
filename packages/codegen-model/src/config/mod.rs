//! Generation configuration
//!
//! The annotation vocabulary, lifting rules, naming conventions and
//! persistence-shape rules the engine applies. `Default` is the canonical
//! configuration; hosts with a different vocabulary load a YAML file.
//!
//! ```rust,ignore
//! use codegen_model::GenerationConfig;
//!
//! let config = GenerationConfig::default().validated()?;
//! let config = GenerationConfig::from_yaml("codegen.yaml")?;
//! ```

pub mod error;
pub mod generation_config;
pub mod io;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use generation_config::{
    AnnotationNames, GenerationConfig, LiftingConfig, NamingConfig, PersistenceConfig,
    ValidatedConfig, SUPPORTED_VERSION,
};
pub use validation::Validatable;
