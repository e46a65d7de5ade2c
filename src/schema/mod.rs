//! Structural validation of API response bodies.
//!
//! Validation runs in two phases: the body is first walked against the resource's
//! [`Shape`], collecting every violating path, and only a structurally valid body is
//! then deserialized into its typed form. Neither phase panics on malformed input.

pub mod shape;
pub mod shapes;
pub mod types;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

pub use shape::{Field, Presence, SchemaViolation, Shape};
pub use types::{
    Action, AdvancedRoutesResponse, Bridge, ChainIdValue, ErrorResponse, Estimate, Exchange,
    FeeCost, GasCost, IncludedStep, QuoteResponse, Route, SingleToken, Step, StepType, SupportedChainPair,
    Token, ToolDetails, ToolError, ToolErrors, ToolsResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Quote,
    AdvancedRoutes,
    Tools,
    Token,
    Error,
}

impl ResponseKind {
    pub fn shape(&self) -> &'static Shape {
        match self {
            ResponseKind::Quote => &shapes::STEP,
            ResponseKind::AdvancedRoutes => &shapes::ADVANCED_ROUTES,
            ResponseKind::Tools => &shapes::TOOLS,
            ResponseKind::Token => &shapes::SINGLE_TOKEN,
            ResponseKind::Error => &shapes::ERROR_RESPONSE,
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseKind::Quote => "Quote",
            ResponseKind::AdvancedRoutes => "AdvancedRoutes",
            ResponseKind::Tools => "Tools",
            ResponseKind::Token => "Token",
            ResponseKind::Error => "ErrorResponse",
        };
        f.write_str(name)
    }
}

/// A typed response resource bound to the shape it is validated against.
pub trait Resource: DeserializeOwned {
    const KIND: ResponseKind;
}

impl Resource for Step {
    const KIND: ResponseKind = ResponseKind::Quote;
}

impl Resource for AdvancedRoutesResponse {
    const KIND: ResponseKind = ResponseKind::AdvancedRoutes;
}

impl Resource for ToolsResponse {
    const KIND: ResponseKind = ResponseKind::Tools;
}

impl Resource for SingleToken {
    const KIND: ResponseKind = ResponseKind::Token;
}

impl Resource for ErrorResponse {
    const KIND: ResponseKind = ResponseKind::Error;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedBody {
    Quote(Step),
    AdvancedRoutes(AdvancedRoutesResponse),
    Tools(ToolsResponse),
    Token(SingleToken),
    Error(ErrorResponse),
}

/// Validate `raw` as `T`, returning the typed value or every violation found.
pub fn validate_as<T: Resource>(raw: &Value) -> Result<T, Vec<SchemaViolation>> {
    let violations = T::KIND.shape().check(raw);
    if !violations.is_empty() {
        return Err(violations);
    }
    T::deserialize(raw).map_err(|e| vec![SchemaViolation::new("$", e.to_string())])
}

pub fn validate(kind: ResponseKind, raw: &Value) -> Result<ValidatedBody, Vec<SchemaViolation>> {
    Ok(match kind {
        ResponseKind::Quote => ValidatedBody::Quote(validate_as(raw)?),
        ResponseKind::AdvancedRoutes => ValidatedBody::AdvancedRoutes(validate_as(raw)?),
        ResponseKind::Tools => ValidatedBody::Tools(validate_as(raw)?),
        ResponseKind::Token => ValidatedBody::Token(validate_as(raw)?),
        ResponseKind::Error => ValidatedBody::Error(validate_as(raw)?),
    })
}
