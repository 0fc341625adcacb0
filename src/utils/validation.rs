use crate::utils::error::{LinkdockError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LinkdockError::ValidationError {
            field: field_name.to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LinkdockError::ValidationError {
                field: field_name.to_string(),
                message: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LinkdockError::ValidationError {
            field: field_name.to_string(),
            message: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LinkdockError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Bound is counted in characters, not bytes.
pub fn validate_max_chars(field_name: &str, value: &str, max_chars: usize) -> Result<()> {
    let length = value.chars().count();
    if length > max_chars {
        return Err(LinkdockError::ValidationError {
            field: field_name.to_string(),
            message: format!("Length {} exceeds maximum of {} characters", length, max_chars),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("auth.host", "https://example.com").is_ok());
        assert!(validate_url("auth.host", "http://example.com").is_ok());
        assert!(validate_url("auth.host", "").is_err());
        assert!(validate_url("auth.host", "invalid-url").is_err());
        assert!(validate_url("auth.host", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("auth.user", "admin").is_ok());
        assert!(validate_non_empty_string("auth.user", "   ").is_err());
    }

    #[test]
    fn test_validate_max_chars_boundary() {
        let exact = "a".repeat(2048);
        assert!(validate_max_chars("name", &exact, 2048).is_ok());

        let over = "a".repeat(2049);
        let err = validate_max_chars("name", &over, 2048).unwrap_err();
        match err {
            LinkdockError::ValidationError { field, .. } => assert_eq!(field, "name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_max_chars_counts_characters_not_bytes() {
        let value = "é".repeat(2048);
        assert!(validate_max_chars("description", &value, 2048).is_ok());
    }
}
