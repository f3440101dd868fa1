//! HTTP plumbing shared by every provider: one client, one status check,
//! one JSON decode path.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// Build the HTTP client shared by every provider.
///
/// # Errors
///
/// Returns [`ProviderError::Http`] if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    Ok(reqwest::Client::builder()
        .user_agent("verita/0.1")
        .timeout(timeout)
        .build()?)
}

/// Map rate limiting and non-success statuses to [`ProviderError`].
///
/// A 429 becomes [`ProviderError::RateLimited`] (`Retry-After` seconds,
/// 60 when absent or not numeric); any other non-2xx status becomes
/// [`ProviderError::Api`] carrying the body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        StatusCode::TOO_MANY_REQUESTS => Err(ProviderError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        }),
        status => Err(ProviderError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

/// Read a checked response body and decode it as JSON.
///
/// Decoding failures surface as [`ProviderError::Parse`] carrying the serde
/// message, so a provider that changes its response shape is reported
/// distinctly from a transport failure.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ProviderError> {
    let body = check_response(resp).await?.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ProviderError::Parse(e.to_string()))
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    const DEFAULT_RETRY_AFTER_SECS: u64 = 60;
    resp.headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(403, "key invalid");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "key invalid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[derive(Debug, serde::Deserialize)]
    struct Ping {
        ok: bool,
    }

    #[tokio::test]
    async fn read_json_decodes_body() {
        let resp = mock_response(200, r#"{"ok": true}"#);
        let ping: Ping = read_json(resp).await.unwrap();
        assert!(ping.ok);
    }

    #[tokio::test]
    async fn read_json_reports_shape_changes_as_parse_errors() {
        let resp = mock_response(200, r#"{"different": 1}"#);
        let err = read_json::<Ping>(resp).await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[tokio::test]
    async fn read_json_checks_status_first() {
        let resp = mock_response(500, r#"{"ok": true}"#);
        let err = read_json::<Ping>(resp).await.unwrap_err();
        assert!(matches!(err, ProviderError::Api { status: 500, .. }));
    }
}
