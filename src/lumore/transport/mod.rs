//! # Transport Layer
//!
//! The HTTP client is not part of this crate. [`AdminApi`](crate::api::AdminApi)
//! describes every call as an [`ApiRequest`] (absolute via [`ApiRequest::url`])
//! and hands it to a [`Transport`], which is responsible for URL encoding, the
//! network round trip, timeouts and retries. It reports back the status code and the decoded JSON payload; turning
//! a non-2xx status into an error is the facade's job.
//!
//! - [`canned::CannedTransport`]: records requests and replays queued answers

use crate::error::Result;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub mod canned;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        };
        f.write_str(name)
    }
}

/// A call to the admin API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub method: Method,
    /// API root the path is appended to, e.g. `http://localhost:5000/api`
    pub base_url: String,
    pub path: String,
    /// Unencoded query parameters
    pub query: IndexMap<String, String>,
    pub body: Option<Value>,
    /// `Authorization` header value
    pub authorization: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            base_url: String::new(),
            path: path.into(),
            query: IndexMap::new(),
            body: None,
            authorization: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Patch, path).with_body(body)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_authorization(mut self, value: Option<String>) -> Self {
        self.authorization = value;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Base URL plus path, without the query string.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

/// What came back from the server.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Decoded JSON body; `None` if the body was empty or not JSON
    pub payload: Option<Value>,
}

impl RawResponse {
    pub fn new(status: u16, payload: Option<Value>) -> Self {
        Self { status, payload }
    }

    pub fn ok(payload: Value) -> Self {
        Self::new(200, Some(payload))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the admin API.
pub trait Transport {
    /// Perform the call. Only failures to get any answer at all are errors here.
    fn send(&mut self, request: &ApiRequest) -> Result<RawResponse>;
}
