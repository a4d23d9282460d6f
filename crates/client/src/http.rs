//! `reqwest` collector.

use async_trait::async_trait;
use ledgerdesk_shared::config::ApiConfig;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::collector::{Collector, Resource, TenantContext};
use crate::error::ClientError;

/// Collector backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpCollector {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpCollector {
    /// Creates a collector with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a collector sharing an existing HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Result<Self, ClientError> {
        // Url::join drops the last segment unless the base ends with a slash
        let mut raw = config.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url =
            Url::parse(&raw).map_err(|_| ClientError::InvalidBaseUrl(config.base_url.clone()))?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    /// Absolute URL of a resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource path cannot be joined to the base URL.
    pub fn endpoint(&self, resource: Resource) -> Result<Url, ClientError> {
        self.base_url
            .join(resource.path())
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))
    }
}

#[async_trait]
impl Collector for HttpCollector {
    async fn fetch(&self, resource: Resource, ctx: &TenantContext) -> Result<Value, ClientError> {
        let url = self.endpoint(resource)?;

        let mut request = self.client.get(url).query(&ctx.query());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%resource, status = status.as_u16(), "list request rejected");
            return Err(ClientError::Status {
                resource: resource.name(),
                status: status.as_u16(),
            });
        }

        let body = response.json::<Value>().await.map_err(|e| ClientError::Decode {
            resource: resource.name(),
            message: e.to_string(),
        })?;

        debug!(%resource, "list response received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            token: Some(String::new()),
        }
    }

    #[rstest]
    #[case("http://localhost:8000/api/")]
    #[case("http://localhost:8000/api")]
    #[case(" http://localhost:8000/api/ ")]
    fn test_endpoint_keeps_api_prefix(#[case] base_url: &str) {
        let collector = HttpCollector::new(&config(base_url)).unwrap();
        assert_eq!(
            collector.endpoint(Resource::SalaryExpenses).unwrap().as_str(),
            "http://localhost:8000/api/salary-expenses/"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = HttpCollector::new(&config("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_blank_token_is_dropped() {
        let collector = HttpCollector::new(&config("http://localhost/api/")).unwrap();
        assert!(collector.token.is_none());
    }
}
