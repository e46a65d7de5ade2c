//! Maps HTTP statuses to outcome categories and validates bodies per category.
//!
//! A 429 is always accepted and never has its body read. Any other status must be in
//! the caller's expected set; there is no implicit default set.

use crate::common::ApiTestError;
use crate::schema::{ErrorResponse, Resource, validate_as};
use std::fmt;
use tracing::{debug, info, warn};

pub const RATE_LIMIT_STATUS: u16 = 429;
pub const SUCCESS_STATUS: &[u16] = &[200];
pub const CLIENT_ERROR_STATUS: &[u16] = &[400, 404, 422];
pub const SERVER_ERROR_STATUS: &[u16] = &[500, 502, 503, 504];

pub fn is_rate_limited(status: u16) -> bool {
    status == RATE_LIMIT_STATUS
}

pub fn is_success(status: u16) -> bool {
    SUCCESS_STATUS.contains(&status)
}

pub fn is_client_error(status: u16) -> bool {
    CLIENT_ERROR_STATUS.contains(&status)
}

pub fn is_server_error(status: u16) -> bool {
    SERVER_ERROR_STATUS.contains(&status)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeCategory {
    Success,
    ClientError,
    ServerError,
    RateLimited,
    /// 1xx/3xx and anything outside the HTTP ranges.
    Unclassified,
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutcomeCategory::Success => "success",
            OutcomeCategory::ClientError => "client error",
            OutcomeCategory::ServerError => "server error",
            OutcomeCategory::RateLimited => "rate limited",
            OutcomeCategory::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

pub fn category_of(status: u16) -> OutcomeCategory {
    match status {
        RATE_LIMIT_STATUS => OutcomeCategory::RateLimited,
        200..=299 => OutcomeCategory::Success,
        400..=499 => OutcomeCategory::ClientError,
        500..=599 => OutcomeCategory::ServerError,
        _ => OutcomeCategory::Unclassified,
    }
}

/// The statuses a call site is prepared to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatuses(Vec<u16>);

impl ExpectedStatuses {
    pub fn of(statuses: &[u16]) -> Self {
        Self(statuses.to_vec())
    }

    pub fn contains(&self, status: u16) -> bool {
        self.0.contains(&status)
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }
}

impl fmt::Display for ExpectedStatuses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
        f.write_str(&joined.join(", "))
    }
}

/// Decide the category for `status`, failing when it is neither expected nor 429.
pub fn classify(status: u16, expected: &ExpectedStatuses) -> Result<OutcomeCategory, ApiTestError> {
    let category = category_of(status);
    if category == OutcomeCategory::RateLimited {
        return Ok(category);
    }
    if !expected.contains(status) {
        warn!(status, expected = %expected, "unexpected status code");
        return Err(ApiTestError::UnexpectedStatus {
            status,
            expected: expected.to_string(),
        });
    }
    Ok(category)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody<T> {
    /// Success body validated against the resource shape.
    Resource(T),
    /// Client-error body validated against the error shape.
    Error(ErrorResponse),
    /// Allowed server errors and unclassified statuses are kept verbatim.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub status: u16,
    pub category: OutcomeCategory,
    /// `None` only for rate-limited outcomes.
    pub body: Option<ResponseBody<T>>,
    pub is_rate_limited: bool,
}

impl<T> Outcome<T> {
    fn rate_limited(status: u16) -> Self {
        Self {
            status,
            category: OutcomeCategory::RateLimited,
            body: None,
            is_rate_limited: true,
        }
    }

    pub fn is_success(&self) -> bool {
        self.category == OutcomeCategory::Success
    }

    pub fn resource(&self) -> Option<&T> {
        match &self.body {
            Some(ResponseBody::Resource(value)) => Some(value),
            _ => None,
        }
    }

    pub fn into_resource(self) -> Option<T> {
        match self.body {
            Some(ResponseBody::Resource(value)) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorResponse> {
        match &self.body {
            Some(ResponseBody::Error(error)) => Some(error),
            _ => None,
        }
    }
}

/// Classify and, unless rate limited, validate an already-read body.
pub fn evaluate<T: Resource>(
    status: u16,
    expected: &ExpectedStatuses,
    body: &[u8],
) -> Result<Outcome<T>, ApiTestError> {
    let category = classify(status, expected)?;
    if category == OutcomeCategory::RateLimited {
        return Ok(Outcome::rate_limited(status));
    }
    decode_body(status, category, body)
}

/// Classify a live response, reading its body only when the category needs it.
pub async fn handle_response<T: Resource>(
    response: reqwest::Response,
    expected: &ExpectedStatuses,
) -> Result<Outcome<T>, ApiTestError> {
    let status = response.status().as_u16();
    let category = classify(status, expected)?;
    debug!(status, %category, kind = %T::KIND, "classified response");

    if category == OutcomeCategory::RateLimited {
        info!(status, "rate limited; skipping body validation");
        return Ok(Outcome::rate_limited(status));
    }

    let bytes = response.bytes().await?;
    decode_body(status, category, &bytes)
}

fn decode_body<T: Resource>(
    status: u16,
    category: OutcomeCategory,
    body: &[u8],
) -> Result<Outcome<T>, ApiTestError> {
    let body = match category {
        OutcomeCategory::Success => {
            let raw: serde_json::Value = serde_json::from_slice(body)?;
            let resource = validate_as::<T>(&raw).map_err(|violations| {
                ApiTestError::SchemaViolation {
                    kind: T::KIND,
                    violations,
                }
            })?;
            ResponseBody::Resource(resource)
        }
        OutcomeCategory::ClientError => ResponseBody::Error(decode_error(status, body)?),
        OutcomeCategory::ServerError | OutcomeCategory::Unclassified => {
            ResponseBody::Raw(String::from_utf8_lossy(body).into_owned())
        }
        OutcomeCategory::RateLimited => return Ok(Outcome::rate_limited(status)),
    };

    Ok(Outcome {
        status,
        category,
        body: Some(body),
        is_rate_limited: false,
    })
}

fn decode_error(status: u16, body: &[u8]) -> Result<ErrorResponse, ApiTestError> {
    let raw: serde_json::Value = serde_json::from_slice(body)?;
    let error = validate_as::<ErrorResponse>(&raw).map_err(|violations| {
        ApiTestError::SchemaViolation {
            kind: <ErrorResponse as Resource>::KIND,
            violations,
        }
    })?;
    if !error.has_message() {
        return Err(ApiTestError::EmptyErrorMessage(status));
    }
    Ok(error)
}

/// An error body, or a synthetic one for a rate-limited response.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorOutcome {
    pub status: u16,
    pub error: ErrorResponse,
    pub is_rate_limited: bool,
}

/// Expect an error response: the status must be in `expected` (or 429) and the body
/// must validate as an error with a non-empty message, whatever the status range.
pub fn evaluate_error(
    status: u16,
    expected: &ExpectedStatuses,
    body: &[u8],
) -> Result<ErrorOutcome, ApiTestError> {
    if is_rate_limited(status) {
        return Ok(ErrorOutcome {
            status,
            error: ErrorResponse::rate_limited(),
            is_rate_limited: true,
        });
    }
    if !expected.contains(status) {
        warn!(status, expected = %expected, "unexpected error status");
        return Err(ApiTestError::UnexpectedStatus {
            status,
            expected: expected.to_string(),
        });
    }
    Ok(ErrorOutcome {
        status,
        error: decode_error(status, body)?,
        is_rate_limited: false,
    })
}

pub async fn expect_error_response(
    response: reqwest::Response,
    expected: &ExpectedStatuses,
) -> Result<ErrorOutcome, ApiTestError> {
    let status = response.status().as_u16();
    if is_rate_limited(status) {
        info!(status, "rate limited; skipping error body validation");
        return evaluate_error(status, expected, &[]);
    }
    let bytes = response.bytes().await?;
    evaluate_error(status, expected, &bytes)
}
