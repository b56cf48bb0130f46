use crate::utils::error::{Result, SpanError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A profile path must name a `.toml` file.
pub fn validate_profile_path(field_name: &str, path: &str) -> Result<()> {
    let invalid = |reason: &str| SpanError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    };

    if path.trim().is_empty() {
        return Err(invalid("a profile path is required unless --period is given"));
    }

    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(()),
        Some(ext) => Err(invalid(&format!("profiles are TOML files, not .{}", ext))),
        None => Err(invalid("profile file has no .toml extension")),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SpanError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SpanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
