//! `lifi-api-tests-rs`
//!
//! End-to-end conformance checks for the LI.FI cross-chain bridging and swap API:
//! typed request builders, structural response validation and status classification.
//!
//! ## Quickstart
//!
//! ```no_run
//! use lifi_api_tests_rs::{ExpectedStatuses, LifiClient, fixtures};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), lifi_api_tests_rs::ApiTestError> {
//! let client = LifiClient::from_env()?;
//! let pair = fixtures::primary_pair();
//!
//! let outcome = client
//!     .quote(&pair.quote_params(), &ExpectedStatuses::of(&[200, 404]))
//!     .await?;
//!
//! if let Some(step) = outcome.resource() {
//!     println!("{} -> {} via {}", step.estimate.from_amount, step.estimate.to_amount, step.tool);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod common;
pub mod fixtures;
pub mod lifi;
pub mod load;
pub mod schema;

// Re-export common types
pub use classifier::{
    ErrorOutcome, ExpectedStatuses, Outcome, OutcomeCategory, ResponseBody, classify,
    expect_error_response, handle_response,
};
pub use common::{
    ApiConfig, ApiTestError, ApiTrait, LatencyBudget, addresses_match, init_tracing,
    is_positive_amount, is_valid_evm_address, is_valid_solana_address, normalize_address,
};
pub use lifi::{
    ChainRef, LifiClient, Order, QuoteParams, RouteOptions, RoutesRequest, TimingOptions,
    TimingStrategy, TokenParams, ToolFilter, ToolsParams,
};
pub use load::{LatencyReport, Sample, fan_out, fan_out_all};
pub use schema::{
    ErrorResponse, ResponseKind, SchemaViolation, ValidatedBody, validate, validate_as,
};
