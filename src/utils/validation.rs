use crate::utils::error::{BackupError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BackupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BackupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BackupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Container names follow the S3 bucket rules: 3-63 chars, lowercase letters,
/// digits, hyphens, and dots, not starting or ending with a hyphen.
pub fn validate_container_name(field_name: &str, name: &str) -> Result<()> {
    if name.len() < 3 || name.len() > 63 {
        return Err(BackupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Container name must be between 3 and 63 characters".to_string(),
        });
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
    {
        return Err(BackupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Container name can only contain lowercase letters, numbers, hyphens, and dots"
                .to_string(),
        });
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(BackupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Container name cannot start or end with a hyphen".to_string(),
        });
    }

    Ok(())
}

pub fn validate_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(BackupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "Region can only contain lowercase letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_name_rules() {
        assert!(validate_container_name("container", "backups").is_ok());
        assert!(validate_container_name("container", "my.backups-2026").is_ok());
        assert!(validate_container_name("container", "ab").is_err());
        assert!(validate_container_name("container", "Backups").is_err());
        assert!(validate_container_name("container", "-backups").is_err());
        assert!(validate_container_name("container", "backups-").is_err());
    }

    #[test]
    fn path_rules() {
        assert!(validate_path("source_path", "/var/backups/db.bak").is_ok());
        assert!(validate_path("source_path", "").is_err());
        assert!(validate_path("source_path", "bad\0path").is_err());
    }

    #[test]
    fn region_rules() {
        assert!(validate_region("region", "us-east-1").is_ok());
        assert!(validate_region("region", "US-EAST-1").is_err());
        assert!(validate_region("region", " ").is_err());
    }
}
