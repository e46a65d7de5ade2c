//! Request parameters for each endpoint and their wire encoding.

use serde::Serialize;
use std::fmt;

pub type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    Fastest,
    Cheapest,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Fastest => "FASTEST",
            Order::Cheapest => "CHEAPEST",
        }
    }
}

/// Wait-for-more-results policy. Rendered as `minWaitTime-600-4-300` in a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingStrategy {
    pub strategy: String,
    pub min_wait_time_ms: u64,
    pub starting_expected_results: u32,
    pub reduce_every_ms: u64,
}

impl TimingStrategy {
    pub fn min_wait_time(min_wait_time_ms: u64, starting_expected_results: u32, reduce_every_ms: u64) -> Self {
        Self {
            strategy: "minWaitTime".to_string(),
            min_wait_time_ms,
            starting_expected_results,
            reduce_every_ms,
        }
    }
}

impl fmt::Display for TimingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.strategy, self.min_wait_time_ms, self.starting_expected_results, self.reduce_every_ms
        )
    }
}

/// `GET /quote` parameters. The six leading fields are always sent, even when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteParams {
    pub from_chain: String,
    pub to_chain: String,
    pub from_token: String,
    pub to_token: String,
    pub from_amount: String,
    pub from_address: String,
    pub to_address: Option<String>,
    pub order: Option<Order>,
    pub slippage: Option<f64>,
    pub integrator: Option<String>,
    pub fee: Option<f64>,
    pub referrer: Option<String>,
    pub allow_bridges: Option<Vec<String>>,
    pub allow_exchanges: Option<Vec<String>>,
    pub deny_bridges: Option<Vec<String>>,
    pub deny_exchanges: Option<Vec<String>>,
    pub prefer_bridges: Option<Vec<String>>,
    pub prefer_exchanges: Option<Vec<String>>,
    pub allow_destination_call: Option<bool>,
    pub from_amount_for_gas: Option<String>,
    pub max_price_impact: Option<f64>,
    pub swap_step_timing_strategies: Option<Vec<String>>,
    pub route_timing_strategies: Option<Vec<String>>,
    pub skip_simulation: Option<bool>,
}

impl QuoteParams {
    pub fn new(
        from_chain: impl Into<String>,
        to_chain: impl Into<String>,
        from_token: impl Into<String>,
        to_token: impl Into<String>,
        from_amount: impl Into<String>,
        from_address: impl Into<String>,
    ) -> Self {
        Self {
            from_chain: from_chain.into(),
            to_chain: to_chain.into(),
            from_token: from_token.into(),
            to_token: to_token.into(),
            from_amount: from_amount.into(),
            from_address: from_address.into(),
            ..Default::default()
        }
    }

    /// Single-valued optionals are skipped when unset or empty; list values are
    /// repeated under the same key, skipping empty entries.
    pub fn to_query(&self) -> QueryPairs {
        let mut query: QueryPairs = vec![
            ("fromChain".to_string(), self.from_chain.clone()),
            ("toChain".to_string(), self.to_chain.clone()),
            ("fromToken".to_string(), self.from_token.clone()),
            ("toToken".to_string(), self.to_token.clone()),
            ("fromAmount".to_string(), self.from_amount.clone()),
            ("fromAddress".to_string(), self.from_address.clone()),
        ];

        let optional: [(&str, Option<String>); 10] = [
            ("toAddress", self.to_address.clone()),
            ("order", self.order.map(|o| o.as_str().to_string())),
            ("slippage", self.slippage.map(|v| v.to_string())),
            ("integrator", self.integrator.clone()),
            ("fee", self.fee.map(|v| v.to_string())),
            ("referrer", self.referrer.clone()),
            ("allowDestinationCall", self.allow_destination_call.map(|v| v.to_string())),
            ("fromAmountForGas", self.from_amount_for_gas.clone()),
            ("maxPriceImpact", self.max_price_impact.map(|v| v.to_string())),
            ("skipSimulation", self.skip_simulation.map(|v| v.to_string())),
        ];
        for (key, value) in optional {
            push_single(&mut query, key, value);
        }

        let repeated: [(&str, &Option<Vec<String>>); 8] = [
            ("allowBridges", &self.allow_bridges),
            ("allowExchanges", &self.allow_exchanges),
            ("denyBridges", &self.deny_bridges),
            ("denyExchanges", &self.deny_exchanges),
            ("preferBridges", &self.prefer_bridges),
            ("preferExchanges", &self.prefer_exchanges),
            ("swapStepTimingStrategies", &self.swap_step_timing_strategies),
            ("routeTimingStrategies", &self.route_timing_strategies),
        ];
        for (key, values) in repeated {
            push_repeated(&mut query, key, values.as_deref());
        }

        query
    }
}

fn push_single(query: &mut QueryPairs, key: &str, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        query.push((key.to_string(), value));
    }
}

fn push_repeated(query: &mut QueryPairs, key: &str, values: Option<&[String]>) {
    for value in values.unwrap_or_default() {
        if !value.is_empty() {
            query.push((key.to_string(), value.clone()));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_step_timing_strategies: Option<Vec<TimingStrategy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_timing_strategies: Option<Vec<TimingStrategy>>,
}

/// `options` object of the advanced-routes body; the body form of the quote optionals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridges: Option<ToolFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchanges: Option<ToolFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_switch_chain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_destination_call: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price_impact: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingOptions>,
}

/// `POST /advanced/routes` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutesRequest {
    pub from_chain_id: u64,
    pub to_chain_id: u64,
    pub from_token_address: String,
    pub to_token_address: String,
    pub from_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_amount_for_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RouteOptions>,
}

/// A chain given by numeric id or by key (e.g. `"POL"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainRef {
    Id(u64),
    Key(String),
}

impl fmt::Display for ChainRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainRef::Id(id) => write!(f, "{}", id),
            ChainRef::Key(key) => f.write_str(key),
        }
    }
}

impl From<u64> for ChainRef {
    fn from(id: u64) -> Self {
        ChainRef::Id(id)
    }
}

impl From<&str> for ChainRef {
    fn from(key: &str) -> Self {
        ChainRef::Key(key.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolsParams {
    /// `None` requests every tool; an empty list sends no `chains` entries.
    pub chains: Option<Vec<ChainRef>>,
}

impl ToolsParams {
    pub fn for_chains<C: Into<ChainRef>>(chains: impl IntoIterator<Item = C>) -> Self {
        Self {
            chains: Some(chains.into_iter().map(Into::into).collect()),
        }
    }

    pub fn to_query(&self) -> QueryPairs {
        self.chains
            .iter()
            .flatten()
            .map(|chain| ("chains".to_string(), chain.to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParams {
    pub chain: String,
    pub token: String,
}

impl TokenParams {
    pub fn new(chain: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            token: token.into(),
        }
    }

    pub fn to_query(&self) -> QueryPairs {
        vec![
            ("chain".to_string(), self.chain.clone()),
            ("token".to_string(), self.token.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(query: &QueryPairs) -> Vec<&str> {
        query.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn quote_required_fields_are_always_sent() {
        let query = QuoteParams::default().to_query();
        assert_eq!(
            keys(&query),
            vec!["fromChain", "toChain", "fromToken", "toToken", "fromAmount", "fromAddress"]
        );
        assert!(query.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn quote_optionals_skip_unset_and_empty() {
        let params = QuoteParams {
            order: Some(Order::Cheapest),
            slippage: Some(0.003),
            integrator: Some(String::new()),
            allow_destination_call: Some(false),
            ..QuoteParams::new("1", "137", "0xa", "0xb", "1000", "0xc")
        };
        let query = params.to_query();
        assert!(query.contains(&("order".to_string(), "CHEAPEST".to_string())));
        assert!(query.contains(&("slippage".to_string(), "0.003".to_string())));
        assert!(query.contains(&("allowDestinationCall".to_string(), "false".to_string())));
        assert!(!keys(&query).contains(&"integrator"));
        assert!(!keys(&query).contains(&"toAddress"));
    }

    #[test]
    fn quote_lists_repeat_the_key() {
        let params = QuoteParams {
            allow_bridges: Some(vec!["across".into(), "".into(), "stargate".into()]),
            route_timing_strategies: Some(vec![
                TimingStrategy::min_wait_time(600, 4, 300).to_string(),
            ]),
            ..QuoteParams::new("1", "10", "0xa", "0xb", "1000", "0xc")
        };
        let query = params.to_query();
        let bridges: Vec<&str> = query
            .iter()
            .filter(|(k, _)| k == "allowBridges")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(bridges, vec!["across", "stargate"]);
        assert!(query.contains(&(
            "routeTimingStrategies".to_string(),
            "minWaitTime-600-4-300".to_string()
        )));
    }

    #[test]
    fn routes_body_nests_options() {
        let body = RoutesRequest {
            from_chain_id: 1,
            to_chain_id: 137,
            from_token_address: "0xa".into(),
            to_token_address: "0xb".into(),
            from_amount: "1000".into(),
            from_address: Some("0xc".into()),
            options: Some(RouteOptions {
                order: Some(Order::Fastest),
                slippage: Some(0.005),
                bridges: Some(ToolFilter {
                    deny: Some(vec!["hop".into()]),
                    ..Default::default()
                }),
                timing: Some(TimingOptions {
                    swap_step_timing_strategies: Some(vec![TimingStrategy::min_wait_time(600, 4, 300)]),
                    route_timing_strategies: None,
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "fromChainId": 1,
                "toChainId": 137,
                "fromTokenAddress": "0xa",
                "toTokenAddress": "0xb",
                "fromAmount": "1000",
                "fromAddress": "0xc",
                "options": {
                    "slippage": 0.005,
                    "bridges": { "deny": ["hop"] },
                    "order": "FASTEST",
                    "timing": {
                        "swapStepTimingStrategies": [{
                            "strategy": "minWaitTime",
                            "minWaitTimeMs": 600,
                            "startingExpectedResults": 4,
                            "reduceEveryMs": 300
                        }]
                    }
                }
            })
        );
    }

    #[test]
    fn tools_query_mixes_ids_and_keys() {
        assert!(ToolsParams::default().to_query().is_empty());
        assert!(ToolsParams::for_chains(Vec::<u64>::new()).to_query().is_empty());

        let params = ToolsParams {
            chains: Some(vec![ChainRef::from(1u64), ChainRef::from("POL")]),
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("chains".to_string(), "1".to_string()),
                ("chains".to_string(), "POL".to_string())
            ]
        );
    }
}
