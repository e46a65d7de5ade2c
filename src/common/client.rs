use crate::common::{ApiConfig, ApiTestError};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

pub const API_KEY_HEADER: &str = "x-lifi-api-key";

/// Create HTTP client with JSON headers, the configured timeout and the optional API key
pub fn create_http_client(config: &ApiConfig) -> Result<reqwest::Client, ApiTestError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .default_headers(default_headers(config)?)
        .build()
        .map_err(ApiTestError::HttpError)?;

    Ok(client)
}

fn default_headers(config: &ApiConfig) -> Result<HeaderMap, ApiTestError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(api_key) = &config.api_key {
        let value = HeaderValue::from_str(api_key).map_err(|e| {
            ApiTestError::ConfigError(format!("Invalid LIFI_API_KEY header value: {}", e))
        })?;
        headers.insert(API_KEY_HEADER, value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_header_only_when_configured() {
        let headers = default_headers(&ApiConfig::default()).unwrap();
        assert!(headers.get(API_KEY_HEADER).is_none());
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");

        let headers = default_headers(&ApiConfig::default().with_api_key("abc")).unwrap();
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "abc");
    }

    #[test]
    fn rejects_api_key_with_control_characters() {
        let config = ApiConfig::default().with_api_key("bad\nkey");
        assert!(matches!(
            create_http_client(&config),
            Err(ApiTestError::ConfigError(_))
        ));
    }
}
