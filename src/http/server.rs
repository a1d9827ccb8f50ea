//! Server-side response helpers for `tiny_http`.

use anyhow::{Result, anyhow};
use serde::Serialize;
use std::io::{Cursor, Empty};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// An empty 200 OK response.
pub fn ok_response() -> Response<Empty> {
    Response::empty(200)
}

/// A plain-text response for the given status code. An empty message falls
/// back to the status line's canonical reason phrase.
pub fn error_response(status: u16, message: &str) -> Response<Cursor<Vec<u8>>> {
    let status = StatusCode(status);
    let body = if message.is_empty() {
        status.default_reason_phrase().to_string()
    } else {
        message.to_string()
    };
    Response::from_string(body).with_status_code(status)
}

/// A 200 response with a JSON body and `application/json` content type.
pub fn json_response<T: Serialize>(data: &T) -> Result<Response<Cursor<Vec<u8>>>> {
    let body = serde_json::to_string(data)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| anyhow!("Failed to create content-type header"))?;
    Ok(Response::from_string(body).with_header(header))
}

/// The `Access-Control-Allow-*` header set for the given values.
pub fn cors_headers(
    allow_origin: &str,
    allow_headers: &str,
    allow_methods: &str,
) -> Result<Vec<Header>> {
    let entries = [
        ("Access-Control-Allow-Origin", allow_origin),
        ("Access-Control-Allow-Headers", allow_headers),
        ("Access-Control-Allow-Methods", allow_methods),
    ];
    entries
        .iter()
        .map(|(field, value)| {
            Header::from_bytes(field.as_bytes(), value.as_bytes())
                .map_err(|_| anyhow!("Failed to create header {field}"))
        })
        .collect()
}

/// Answer a CORS preflight.
///
/// For an OPTIONS request, returns a 200 response carrying the
/// `Access-Control-Allow-*` headers; any other method yields `None` and the
/// caller handles the request normally. When `allow_headers` or
/// `allow_methods` is `None`, the values requested by the client via
/// `Access-Control-Request-*` are echoed back.
pub fn preflight_for_cors(
    request: &Request,
    allow_headers: Option<&[&str]>,
    allow_methods: Option<&[&str]>,
    allow_origin: &str,
) -> Result<Option<Response<Empty>>> {
    if request.method() != &Method::Options {
        return Ok(None);
    }

    let headers = match allow_headers {
        Some(list) => list.join(", "),
        None => header_value(request, "Access-Control-Request-Headers"),
    };
    let methods = match allow_methods {
        Some(list) => list.join(", "),
        None => header_value(request, "Access-Control-Request-Method"),
    };

    let mut response = Response::empty(200);
    for header in cors_headers(allow_origin, &headers, &methods)? {
        response = response.with_header(header);
    }
    Ok(Some(response))
}

fn header_value(request: &Request, field: &'static str) -> String {
    request
        .headers()
        .iter()
        .find(|header| header.field.equiv(field))
        .map(|header| header.value.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Payload {
        status: String,
    }

    fn header_map(headers: &[Header]) -> Vec<(String, String)> {
        headers
            .iter()
            .map(|header| (header.field.to_string(), header.value.to_string()))
            .collect()
    }

    #[test]
    fn test_cors_headers() {
        let headers = cors_headers("https://example.com", "Authorization", "GET, POST").unwrap();
        assert_eq!(
            header_map(&headers),
            vec![
                (
                    "Access-Control-Allow-Origin".to_string(),
                    "https://example.com".to_string()
                ),
                (
                    "Access-Control-Allow-Headers".to_string(),
                    "Authorization".to_string()
                ),
                (
                    "Access-Control-Allow-Methods".to_string(),
                    "GET, POST".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_json_response_serializes_payload() {
        let payload = Payload {
            status: "ok".to_string(),
        };
        // Building the response proves the payload serializes and the
        // content-type header is accepted.
        assert!(json_response(&payload).is_ok());
    }

    #[test]
    fn test_error_response_builds_for_common_statuses() {
        for status in [400, 401, 403, 404, 405, 500, 501, 502, 503, 504] {
            let _ = error_response(status, "");
            let _ = error_response(status, "something broke");
        }
    }
}
