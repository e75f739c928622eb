use super::{ApiRequest, RawResponse, Transport};
use crate::error::{LumoreError, Result};
use std::collections::VecDeque;

/// Transport that answers from a queue and remembers what it was asked.
#[derive(Debug, Default)]
pub struct CannedTransport {
    responses: VecDeque<RawResponse>,
    requests: Vec<ApiRequest>,
}

impl CannedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next answer.
    pub fn respond(mut self, response: RawResponse) -> Self {
        self.responses.push_back(response);
        self
    }

    pub fn push_response(&mut self, response: RawResponse) {
        self.responses.push_back(response);
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> &[ApiRequest] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&ApiRequest> {
        self.requests.last()
    }
}

impl Transport for CannedTransport {
    fn send(&mut self, request: &ApiRequest) -> Result<RawResponse> {
        self.requests.push(request.clone());
        self.responses.pop_front().ok_or_else(|| {
            LumoreError::Validation(format!(
                "no canned response left for {} {}",
                request.method, request.path
            ))
        })
    }
}
