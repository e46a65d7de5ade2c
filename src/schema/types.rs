use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub decimals: u64,
    pub chain_id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_key: Option<String>,
    #[serde(rename = "priceUSD", default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<String>,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

/// `GET /token` payload: a token with market fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleToken {
    #[serde(flatten)]
    pub token: Token,
    #[serde(rename = "marketCapUSD", default, skip_serializing_if = "Option::is_none")]
    pub market_cap_usd: Option<f64>,
    #[serde(rename = "volumeUSD24H", default, skip_serializing_if = "Option::is_none")]
    pub volume_usd_24h: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub from_chain_id: u64,
    pub to_chain_id: u64,
    pub from_token: Token,
    pub to_token: Token,
    pub from_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slippage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeCost {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub percentage: String,
    pub token: Token,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "amountUSD")]
    pub amount_usd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasCost {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    pub amount: String,
    #[serde(rename = "amountUSD", default, skip_serializing_if = "Option::is_none")]
    pub amount_usd: Option<String>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    pub from_amount: String,
    #[serde(rename = "fromAmountUSD", default, skip_serializing_if = "Option::is_none")]
    pub from_amount_usd: Option<String>,
    pub to_amount: String,
    pub to_amount_min: String,
    #[serde(rename = "toAmountUSD", default, skip_serializing_if = "Option::is_none")]
    pub to_amount_usd: Option<String>,
    pub approval_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_costs: Option<Vec<FeeCost>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_costs: Option<Vec<GasCost>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Swap,
    Cross,
    Lifi,
    Protocol,
}

/// One level of decomposition below a [`Step`]. Its `type` is free-form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludedStep {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tool: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_details: Option<ToolDetails>,
    pub action: Action,
    pub estimate: Estimate,
}

/// A route step. `GET /quote` returns exactly this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<StepType>,
    pub tool: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_details: Option<ToolDetails>,
    pub action: Action,
    pub estimate: Estimate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_steps: Option<Vec<IncludedStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_request: Option<Value>,
}

impl Step {
    pub fn included_steps(&self) -> &[IncludedStep] {
        self.included_steps.as_deref().unwrap_or_default()
    }
}

pub type QuoteResponse = Step;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub from_chain_id: u64,
    pub to_chain_id: u64,
    pub from_token: Token,
    pub to_token: Token,
    pub from_amount: String,
    #[serde(rename = "fromAmountUSD", default, skip_serializing_if = "Option::is_none")]
    pub from_amount_usd: Option<String>,
    pub to_amount: String,
    pub to_amount_min: String,
    #[serde(rename = "toAmountUSD", default, skip_serializing_if = "Option::is_none")]
    pub to_amount_usd: Option<String>,
    #[serde(rename = "gasCostUSD", default, skip_serializing_if = "Option::is_none")]
    pub gas_cost_usd: Option<String>,
    /// Execution order.
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_switch_chain: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedRoutesResponse {
    pub routes: Vec<Route>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable_routes: Option<Value>,
}

/// Chain identifiers arrive as either numbers or strings in the tools listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainIdValue {
    Number(Number),
    Text(String),
}

impl ChainIdValue {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ChainIdValue::Number(n) => n.as_u64(),
            ChainIdValue::Text(s) => s.parse().ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedChainPair {
    pub from_chain_id: ChainIdValue,
    pub to_chain_id: ChainIdValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bridge {
    pub key: String,
    pub name: String,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_chains: Option<Vec<SupportedChainPair>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub key: String,
    pub name: String,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_chains: Option<Vec<ChainIdValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridges: Option<Vec<Bridge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchanges: Option<Vec<Exchange>>,
}

impl ToolsResponse {
    pub fn has_any_tool_list(&self) -> bool {
        self.bridges.is_some() || self.exchanges.is_some()
    }
}

/// Per-tool failure detail inside an [`ErrorResponse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The server sends tool errors keyed by name or as a plain list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolErrors {
    ByKey(BTreeMap<String, ToolError>),
    ByIndex(Vec<ToolError>),
}

impl ToolErrors {
    /// Uniform view over both layouts; keys are `None` for the list form.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (Option<&str>, &ToolError)> + '_> {
        match self {
            ToolErrors::ByKey(map) => Box::new(map.iter().map(|(k, v)| (Some(k.as_str()), v))),
            ToolErrors::ByIndex(list) => Box::new(list.iter().map(|v| (None, v))),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ToolErrors::ByKey(map) => map.len(),
            ToolErrors::ByIndex(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ToolErrors>,
}

impl ErrorResponse {
    pub fn rate_limited() -> Self {
        Self {
            message: "Rate limited".to_string(),
            error_code: None,
            status_code: Some(429.0),
            errors: None,
        }
    }

    pub fn has_message(&self) -> bool {
        !self.message.trim().is_empty()
    }
}
