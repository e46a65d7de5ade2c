//! Shapes for every resource the API returns.

use crate::schema::shape::{Field, Shape};

pub const STEP_TYPES: &[&str] = &["swap", "cross", "lifi", "protocol"];

static STRING: Shape = Shape::String;
static NUMBER: Shape = Shape::Number;
static UINT: Shape = Shape::UnsignedInteger;
static BOOLEAN: Shape = Shape::Boolean;
static ANY: Shape = Shape::Any;

pub static TOKEN: Shape = Shape::Object(&[
    Field::required("address", &STRING),
    Field::required("symbol", &STRING),
    Field::required("decimals", &UINT),
    Field::required("chainId", &UINT),
    Field::required("name", &STRING),
    Field::optional("coinKey", &STRING),
    Field::optional("priceUSD", &STRING),
    Field::optional("logoURI", &STRING),
]);

/// Token plus market data, as served by `GET /token`.
pub static SINGLE_TOKEN: Shape = Shape::Object(&[
    Field::required("address", &STRING),
    Field::required("symbol", &STRING),
    Field::required("decimals", &UINT),
    Field::required("chainId", &UINT),
    Field::required("name", &STRING),
    Field::optional("coinKey", &STRING),
    Field::optional("priceUSD", &STRING),
    Field::optional("logoURI", &STRING),
    Field::optional("marketCapUSD", &NUMBER),
    Field::optional("volumeUSD24H", &NUMBER),
]);

pub static ACTION: Shape = Shape::Object(&[
    Field::required("fromChainId", &UINT),
    Field::required("toChainId", &UINT),
    Field::required("fromToken", &TOKEN),
    Field::required("toToken", &TOKEN),
    Field::required("fromAmount", &STRING),
    Field::optional("toAddress", &STRING),
    Field::optional("fromAddress", &STRING),
    Field::optional("slippage", &NUMBER),
]);

pub static FEE_COST: Shape = Shape::Object(&[
    Field::required("name", &STRING),
    Field::optional("description", &STRING),
    Field::required("percentage", &STRING),
    Field::required("token", &TOKEN),
    Field::optional("amount", &STRING),
    Field::required("amountUSD", &STRING),
    Field::optional("included", &BOOLEAN),
]);

pub static GAS_COST: Shape = Shape::Object(&[
    Field::required("type", &STRING),
    Field::optional("price", &STRING),
    Field::optional("estimate", &STRING),
    Field::optional("limit", &STRING),
    Field::required("amount", &STRING),
    Field::optional("amountUSD", &STRING),
    Field::required("token", &TOKEN),
]);

static FEE_COSTS: Shape = Shape::Array(&FEE_COST);
static GAS_COSTS: Shape = Shape::Array(&GAS_COST);
static ANY_RECORD: Shape = Shape::Record(&ANY);

pub static ESTIMATE: Shape = Shape::Object(&[
    Field::optional("tool", &STRING),
    Field::required("fromAmount", &STRING),
    Field::optional("fromAmountUSD", &STRING),
    Field::required("toAmount", &STRING),
    Field::required("toAmountMin", &STRING),
    Field::optional("toAmountUSD", &STRING),
    Field::required("approvalAddress", &STRING),
    Field::optional("feeCosts", &FEE_COSTS),
    Field::optional("gasCosts", &GAS_COSTS),
    Field::optional("executionDuration", &NUMBER),
    Field::optional("data", &ANY_RECORD),
]);

/// Every key optional, and the object itself optional where used.
pub static TOOL_DETAILS: Shape = Shape::Object(&[
    Field::optional("key", &STRING),
    Field::optional("name", &STRING),
    Field::optional("logoURI", &STRING),
]);

/// A constituent of an aggregated step. Carries no `includedSteps` of its own.
pub static INCLUDED_STEP: Shape = Shape::Object(&[
    Field::required("id", &STRING),
    Field::required("type", &STRING),
    Field::required("tool", &STRING),
    Field::optional("toolDetails", &TOOL_DETAILS),
    Field::required("action", &ACTION),
    Field::required("estimate", &ESTIMATE),
]);

static STEP_TYPE: Shape = Shape::Enum(STEP_TYPES);
static INCLUDED_STEPS: Shape = Shape::Array(&INCLUDED_STEP);

/// Also the shape of a `GET /quote` response.
pub static STEP: Shape = Shape::Object(&[
    Field::required("id", &STRING),
    Field::optional("type", &STEP_TYPE),
    Field::required("tool", &STRING),
    Field::optional("toolDetails", &TOOL_DETAILS),
    Field::required("action", &ACTION),
    Field::required("estimate", &ESTIMATE),
    Field::optional("integrator", &STRING),
    Field::optional("includedSteps", &INCLUDED_STEPS),
    Field::optional("referrer", &STRING),
    Field::optional("execution", &ANY),
    Field::optional("transactionRequest", &ANY),
]);

static STEPS: Shape = Shape::Array(&STEP);

pub static ROUTE: Shape = Shape::Object(&[
    Field::required("id", &STRING),
    Field::required("fromChainId", &UINT),
    Field::required("toChainId", &UINT),
    Field::required("fromToken", &TOKEN),
    Field::required("toToken", &TOKEN),
    Field::required("fromAmount", &STRING),
    Field::optional("fromAmountUSD", &STRING),
    Field::required("toAmount", &STRING),
    Field::required("toAmountMin", &STRING),
    Field::optional("toAmountUSD", &STRING),
    Field::optional("gasCostUSD", &STRING),
    Field::required("steps", &STEPS),
    Field::optional("fromAddress", &STRING),
    Field::optional("toAddress", &STRING),
    Field::optional("containsSwitchChain", &BOOLEAN),
]);

static ROUTES: Shape = Shape::Array(&ROUTE);
static ANY_ARRAY: Shape = Shape::Array(&ANY);
static ARRAY_OR_RECORD: Shape = Shape::OneOf(&[&ANY_ARRAY, &ANY_RECORD]);

pub static ADVANCED_ROUTES: Shape = Shape::Object(&[
    Field::required("routes", &ROUTES),
    Field::optional("unavailableRoutes", &ARRAY_OR_RECORD),
]);

static CHAIN_ID: Shape = Shape::OneOf(&[&STRING, &NUMBER]);

static SUPPORTED_CHAIN_PAIR: Shape = Shape::Object(&[
    Field::required("fromChainId", &CHAIN_ID),
    Field::required("toChainId", &CHAIN_ID),
]);

static SUPPORTED_CHAIN_PAIRS: Shape = Shape::Array(&SUPPORTED_CHAIN_PAIR);
static SUPPORTED_CHAIN_IDS: Shape = Shape::Array(&CHAIN_ID);

pub static BRIDGE: Shape = Shape::Object(&[
    Field::required("key", &STRING),
    Field::required("name", &STRING),
    Field::optional("logoURI", &STRING),
    Field::optional("supportedChains", &SUPPORTED_CHAIN_PAIRS),
]);

pub static EXCHANGE: Shape = Shape::Object(&[
    Field::required("key", &STRING),
    Field::required("name", &STRING),
    Field::optional("logoURI", &STRING),
    Field::optional("supportedChains", &SUPPORTED_CHAIN_IDS),
]);

static BRIDGES: Shape = Shape::Array(&BRIDGE);
static EXCHANGES: Shape = Shape::Array(&EXCHANGE);

pub static TOOLS: Shape = Shape::Object(&[
    Field::optional("bridges", &BRIDGES),
    Field::optional("exchanges", &EXCHANGES),
]);

pub static TOOL_ERROR: Shape = Shape::Object(&[
    Field::optional("errorType", &STRING),
    Field::optional("code", &STRING),
    Field::optional("action", &ACTION),
    Field::optional("tool", &STRING),
    Field::optional("message", &STRING),
]);

static TOOL_ERRORS_BY_KEY: Shape = Shape::Record(&TOOL_ERROR);
static TOOL_ERRORS_BY_INDEX: Shape = Shape::Array(&TOOL_ERROR);
static TOOL_ERRORS: Shape = Shape::OneOf(&[&TOOL_ERRORS_BY_KEY, &TOOL_ERRORS_BY_INDEX]);

pub static ERROR_RESPONSE: Shape = Shape::Object(&[
    Field::required("message", &STRING),
    Field::optional("errorCode", &STRING),
    Field::optional("statusCode", &NUMBER),
    Field::nullable("errors", &TOOL_ERRORS),
]);
