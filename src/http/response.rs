//! Client-side response helpers.
//!
//! Status-class predicates follow RFC 9110: inclusive lower bound,
//! exclusive upper bound.

use anyhow::{Context, Result, anyhow};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Whether the status is informational class (1xx).
pub fn is_informational(status: StatusCode) -> bool {
    StatusCode::CONTINUE <= status && status < StatusCode::OK
}

/// Whether the status is successful class (2xx).
pub fn is_successful(status: StatusCode) -> bool {
    StatusCode::OK <= status && status < StatusCode::MULTIPLE_CHOICES
}

/// Whether the status is redirection class (3xx).
pub fn is_redirection(status: StatusCode) -> bool {
    StatusCode::MULTIPLE_CHOICES <= status && status < StatusCode::BAD_REQUEST
}

/// Whether the status is client error class (4xx).
pub fn is_client_error(status: StatusCode) -> bool {
    StatusCode::BAD_REQUEST <= status && status < StatusCode::INTERNAL_SERVER_ERROR
}

/// Whether the status is server error class (5xx).
pub fn is_server_error(status: StatusCode) -> bool {
    StatusCode::INTERNAL_SERVER_ERROR <= status && status.as_u16() < 600
}

/// Whether the status is 404 Not Found.
pub fn is_not_found(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND
}

/// Decode the JSON body of a response into a typed value.
pub async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .context("Failed to decode JSON response body")
}

/// Turn a non-success response into an error carrying status and body.
///
/// Success-class responses pass through as `Ok(())`; the body is consumed
/// either way.
pub async fn error_for_response(response: Response) -> Result<()> {
    let status = response.status();
    if is_successful(status) {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(anyhow!(
        "{} {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("unknown"),
        body.trim()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        let data = [
            // (status, informational, successful, redirection, client, server)
            (100, true, false, false, false, false),
            (101, true, false, false, false, false),
            (199, true, false, false, false, false),
            (200, false, true, false, false, false),
            (204, false, true, false, false, false),
            (299, false, true, false, false, false),
            (300, false, false, true, false, false),
            (308, false, false, true, false, false),
            (399, false, false, true, false, false),
            (400, false, false, false, true, false),
            (404, false, false, false, true, false),
            (499, false, false, false, true, false),
            (500, false, false, false, false, true),
            (503, false, false, false, false, true),
            (599, false, false, false, false, true),
        ];
        for (code, informational, successful, redirection, client, server) in data {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(is_informational(status), informational, "{code}");
            assert_eq!(is_successful(status), successful, "{code}");
            assert_eq!(is_redirection(status), redirection, "{code}");
            assert_eq!(is_client_error(status), client, "{code}");
            assert_eq!(is_server_error(status), server, "{code}");
        }
    }

    #[test]
    fn test_is_not_found() {
        assert!(is_not_found(StatusCode::NOT_FOUND));
        assert!(!is_not_found(StatusCode::BAD_REQUEST));
        assert!(!is_not_found(StatusCode::OK));
    }
}
