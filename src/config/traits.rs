use crate::error::PasswordError;
use serde::{Deserialize, Serialize};

/// One `[section]` of the settings file
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), PasswordError>;
}

/// Validate a section, tagging configuration errors with the section they came from
pub fn validate_section<S: ConfigSection>(section: &S) -> Result<(), PasswordError> {
    section.validate().map_err(|e| match e {
        PasswordError::Configuration(msg) => {
            PasswordError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}
