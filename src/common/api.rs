use crate::common::ApiTestError;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

// Common API trait definition
#[async_trait]
pub trait ApiTrait: Send + Sync {
    // API specific methods
    fn api_base(&self) -> &str;
    fn client(&self) -> &reqwest::Client;
    fn api_name(&self) -> &str;

    // Default implementations. The raw response is returned whatever its status;
    // status handling belongs to the classifier.
    async fn get(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<reqwest::Response, ApiTestError> {
        let url = format!("{}/{}", self.api_base(), endpoint);
        debug!(api = self.api_name(), method = "GET", %url, params = query.len(), "dispatching request");

        let mut request = self.client().get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        Ok(request.send().await?)
    }

    async fn post<B: Serialize + Sync + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiTestError> {
        let url = format!("{}/{}", self.api_base(), endpoint);
        debug!(api = self.api_name(), method = "POST", %url, "dispatching request");

        Ok(self.client().post(&url).json(body).send().await?)
    }

    // Trait methods
    async fn health_check(&self) -> Result<(), ApiTestError>;
}
