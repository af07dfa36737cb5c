use crate::utils::error::{PlatformError, Result};
use std::net::IpAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_ip_address(field_name: &str, address: &str) -> Result<IpAddr> {
    validate_non_empty_string(field_name, address)?;

    address
        .trim()
        .parse::<IpAddr>()
        .map_err(|e| PlatformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: format!("Invalid IP address: {}", e),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlatformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 只允許 `[A-Za-z0-9_-]`，名稱會出現在 URL 路徑中
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(PlatformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!(
                "Unsupported character '{}'. Allowed: letters, digits, '-' and '_'",
                bad
            ),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PlatformError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ip_address() {
        assert!(validate_ip_address("server.address", "0.0.0.0").is_ok());
        assert!(validate_ip_address("server.address", "::1").is_ok());
        assert!(validate_ip_address("server.address", "").is_err());
        assert!(validate_ip_address("server.address", "localhost").is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("theme.name", "universo").is_ok());
        assert!(validate_identifier("theme.name", "my_theme-2").is_ok());
        assert!(validate_identifier("theme.name", "../etc").is_err());
        assert!(validate_identifier("theme.name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.shutdown_grace_seconds", 10u64, 0, 300).is_ok());
        assert!(validate_range("server.shutdown_grace_seconds", 301u64, 0, 300).is_err());
    }
}
