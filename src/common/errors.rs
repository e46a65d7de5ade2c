use crate::schema::{ResponseKind, SchemaViolation};

#[derive(thiserror::Error, Debug)]
pub enum ApiTestError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unexpected status code: {status}. Expected one of: {expected}")]
    UnexpectedStatus { status: u16, expected: String },

    #[error("{kind} response failed schema validation:\n{}", format_violations(.violations))]
    SchemaViolation {
        kind: ResponseKind,
        violations: Vec<SchemaViolation>,
    },

    #[error("Error response (status {0}) carried an empty message")]
    EmptyErrorMessage(u16),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

fn format_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}
