//! Client-side request helpers.

use anyhow::{Context, Result};
use reqwest::{Client, Method, Request};
use serde::Serialize;
use url::Url;

/// Build a request, JSON-encoding the body when one is given.
///
/// A body sets `Content-Type: application/json`.
pub fn build_json_request<T: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<&T>,
) -> Result<Request> {
    let mut builder = client.request(method, url);
    if let Some(body) = body {
        builder = builder.json(body);
    }
    builder.build().context("Failed to build HTTP request")
}

/// Append the given query pairs to the request URL.
pub fn add_queries(request: &mut Request, queries: &[(&str, &str)]) {
    let mut pairs = request.url_mut().query_pairs_mut();
    for (key, value) in queries {
        pairs.append_pair(key, value);
    }
}

/// The last path segment of the URL, e.g. `/api/v1/users/12345` -> `12345`.
/// Trailing slashes are ignored; an empty path yields an empty string.
pub fn url_path_base(url: &Url) -> &str {
    url.path_segments()
        .and_then(|segments| segments.rev().find(|segment| !segment.is_empty()))
        .unwrap_or("")
}
