mod params;

pub use params::{
    ChainRef, Order, QueryPairs, QuoteParams, RouteOptions, RoutesRequest, TimingOptions,
    TimingStrategy, TokenParams, ToolFilter, ToolsParams,
};

use crate::classifier::{ExpectedStatuses, Outcome, handle_response};
use crate::common::{ApiConfig, ApiTestError, ApiTrait, create_http_client};
use crate::schema::{AdvancedRoutesResponse, SingleToken, Step, ToolsResponse};
use async_trait::async_trait;

/// Client for the four LI.FI endpoints under test.
///
/// The `get_*`/`post_*` methods return the raw response so callers can classify it
/// themselves; `quote`, `advanced_routes`, `tools` and `token` classify and validate.
#[derive(Debug, Clone)]
pub struct LifiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl LifiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiTestError> {
        Ok(Self {
            client: create_http_client(&config)?,
            config,
        })
    }

    /// Build from `LIFI_BASE_URL`, `API_TIMEOUT` and `LIFI_API_KEY`.
    pub fn from_env() -> Result<Self, ApiTestError> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn get_quote(&self, params: &QuoteParams) -> Result<reqwest::Response, ApiTestError> {
        self.get("quote", &params.to_query()).await
    }

    pub async fn post_advanced_routes(
        &self,
        body: &RoutesRequest,
    ) -> Result<reqwest::Response, ApiTestError> {
        self.post("advanced/routes", body).await
    }

    pub async fn get_tools(&self, params: &ToolsParams) -> Result<reqwest::Response, ApiTestError> {
        self.get("tools", &params.to_query()).await
    }

    pub async fn get_token(&self, params: &TokenParams) -> Result<reqwest::Response, ApiTestError> {
        self.get("token", &params.to_query()).await
    }

    pub async fn quote(
        &self,
        params: &QuoteParams,
        expected: &ExpectedStatuses,
    ) -> Result<Outcome<Step>, ApiTestError> {
        handle_response(self.get_quote(params).await?, expected).await
    }

    pub async fn advanced_routes(
        &self,
        body: &RoutesRequest,
        expected: &ExpectedStatuses,
    ) -> Result<Outcome<AdvancedRoutesResponse>, ApiTestError> {
        handle_response(self.post_advanced_routes(body).await?, expected).await
    }

    pub async fn tools(
        &self,
        params: &ToolsParams,
        expected: &ExpectedStatuses,
    ) -> Result<Outcome<ToolsResponse>, ApiTestError> {
        handle_response(self.get_tools(params).await?, expected).await
    }

    pub async fn token(
        &self,
        params: &TokenParams,
        expected: &ExpectedStatuses,
    ) -> Result<Outcome<SingleToken>, ApiTestError> {
        handle_response(self.get_token(params).await?, expected).await
    }
}

#[async_trait]
impl ApiTrait for LifiClient {
    fn api_base(&self) -> &str {
        &self.config.base_url
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn api_name(&self) -> &str {
        "LI.FI"
    }

    async fn health_check(&self) -> Result<(), ApiTestError> {
        // No ping endpoint; a chain-filtered tools listing is the cheapest call
        let response = self
            .get_tools(&ToolsParams::for_chains([1u64]))
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiTestError::ApiError(format!(
                "{} health check failed: status {}",
                self.api_name(),
                status
            )))
        }
    }
}
