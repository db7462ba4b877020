use crate::utils::error::{Result, TimeWordError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(TimeWordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TimeWordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_optional_path(field_name: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, path),
        None => Ok(()),
    }
}

pub fn validate_exclusive(field_name: &str, set: bool, conflicting: &[(&str, bool)]) -> Result<()> {
    if !set {
        return Ok(());
    }
    if let Some((other, _)) = conflicting.iter().find(|(_, other_set)| *other_set) {
        return Err(TimeWordError::ConfigError {
            message: format!("{} cannot be combined with {}", field_name, other),
        });
    }
    Ok(())
}
