//! Validation trait definition

/// Implemented by every configuration section
///
/// Errors are plain messages; `Config::validate` prefixes them with the section name.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
