//! Configuration validation

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration sections
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Section name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Reject empty or blank names
pub(crate) fn require_name(field: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::empty(field, "Provide a non-blank name"));
    }
    Ok(())
}

/// Reject empty lists and lists containing blank names
pub(crate) fn require_names(field: &str, values: &[String]) -> ConfigResult<()> {
    if values.is_empty() {
        return Err(ConfigError::empty(field, "Provide at least one name"));
    }
    if let Some(blank) = values.iter().position(|v| v.trim().is_empty()) {
        return Err(ConfigError::invalid(
            field,
            format!("entry {blank} is blank"),
        ));
    }
    Ok(())
}
