use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::constant::MAX_URLS_PER_CHECK;

/// Request payload for `POST /api/status/check`
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UrlCheckRequest {
    #[validate(length(max = MAX_URLS_PER_CHECK))]
    pub urls: Vec<String>,
}

/// Outcome of probing a single URL.
///
/// `status_code` is `0` when no HTTP response was received at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlStatus {
    pub url: String,
    pub status_code: u16,
    pub status: String,
}

impl UrlStatus {
    /// A response with the given HTTP status was received.
    pub fn from_response(url: impl Into<String>, status_code: u16) -> Self {
        let status = if (200..300).contains(&status_code) {
            "OK".to_string()
        } else {
            format!("Error: HTTP {status_code}")
        };

        Self {
            url: url.into(),
            status_code,
            status,
        }
    }

    /// The request failed before any response arrived.
    pub fn unreachable(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self {
            url: url.into(),
            status_code: 0,
            status: format!("Error: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_codes_are_ok() {
        let status = UrlStatus::from_response("https://example.com", 204);
        assert_eq!(status.status, "OK");
        assert_eq!(status.status_code, 204);
    }

    #[test]
    fn non_success_codes_are_errors() {
        let status = UrlStatus::from_response("https://example.com/missing", 404);
        assert_eq!(status.status, "Error: HTTP 404");
        assert_eq!(status.status_code, 404);
    }

    #[test]
    fn unreachable_has_zero_code() {
        let status = UrlStatus::unreachable("https://nope.invalid", "dns error");
        assert_eq!(status.status_code, 0);
        assert!(status.status.starts_with("Error"));
    }

    #[test]
    fn request_rejects_too_many_urls() {
        let request = UrlCheckRequest {
            urls: (0..=MAX_URLS_PER_CHECK)
                .map(|i| format!("https://example.com/{i}"))
                .collect(),
        };
        assert!(request.validate().is_err());

        let request = UrlCheckRequest { urls: vec![] };
        assert!(request.validate().is_ok());
    }
}
