use crate::utils::error::{DrillError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DrillError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
    // NaN 不滿足任何比較，也視為超出範圍
    if !(value >= min && value <= max) {
        return Err(DrillError::InvalidConfigValueError {
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
    fn test_validate_url() {
        assert!(validate_url("github.base_url", "https://api.github.com").is_ok());
        assert!(validate_url("github.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("github.base_url", "").is_err());
        assert!(validate_url("github.base_url", "invalid-url").is_err());
        assert!(validate_url("github.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("delays.n", 5, 1).is_ok());
        assert!(validate_positive_number("delays.n", 0, 1).is_err());
        assert!(validate_positive_number("github.timeout_seconds", u64::MAX, 1u64).is_ok());
        assert!(validate_positive_number("github.timeout_seconds", 0u64, 1u64).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("delays.max_delay", 10.0, 0.0, 3600.0).is_ok());
        assert!(validate_range("delays.max_delay", -1.0, 0.0, 3600.0).is_err());
        assert!(validate_range("delays.max_delay", f64::NAN, 0.0, 3600.0).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("github.user_agent", "drillbox").is_ok());
        assert!(validate_non_empty_string("github.user_agent", "   ").is_err());
    }
}
