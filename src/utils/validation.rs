use crate::utils::error::{MeltError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MeltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MeltError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MeltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MeltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects values that would break the one-field-per-line layout.
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(MeltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must fit on a single line".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("website", "https://codemelted.dev").is_ok());
        assert!(validate_url("website", "http://codemelted.dev/modules").is_ok());
        assert!(validate_url("website", "").is_err());
        assert!(validate_url("website", "codemelted.dev").is_err());
        assert!(validate_url("website", "ftp://codemelted.dev").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("title", "melt_the_code").is_ok());
        assert!(validate_non_empty_string("title", "").is_err());
        assert!(validate_non_empty_string("title", "   ").is_err());
    }

    #[test]
    fn test_validate_single_line() {
        assert!(validate_single_line("title", "melt_the_code C++ Module").is_ok());
        assert!(validate_single_line("title", "melt\nthe_code").is_err());
        assert!(validate_single_line("title", "melt\r").is_err());
    }
}
