use paymux_types::{ProviderError, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::StripeConfig;

/// Page size sent to the vendor when a list operation is called without one
pub const DEFAULT_LIST_LIMIT: u64 = 10;

/// Payment vendor client.
///
/// Construction binds the configuration to this instance only; every request
/// carries the instance's key as its credential.
#[derive(Debug, Clone)]
pub struct StripeClient {
    config: StripeConfig,
    http: reqwest::Client,
}

impl StripeClient {
    /// Create a client from a configuration
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client for the production endpoint from a secret key
    pub fn from_secret_key(secret_key: impl Into<String>) -> Self {
        Self::new(StripeConfig::new(secret_key))
    }

    /// Get the configuration this instance was built with
    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint.trim_end_matches('/'), path)
    }

    pub(crate) async fn post_form(&self, path: &str, form: &[(String, String)]) -> Result<Value> {
        let request = self.http.post(self.url(path)).form(form);
        self.send("POST", path, request).await
    }

    pub(crate) async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let request = self.http.get(self.url(path)).query(query);
        self.send("GET", path, request).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value> {
        let request = self.http.delete(self.url(path));
        self.send("DELETE", path, request).await
    }

    /// Issue the operation's single vendor request and normalize its outcome.
    ///
    /// Success resolves with the vendor's payload untouched; a vendor-reported
    /// failure surfaces the error body untouched. Every operation funnels
    /// through here, so each resolves exactly once with one of those two
    /// outcomes.
    async fn send(
        &self,
        method: &'static str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Value> {
        debug!(method, path, "issuing payment vendor request");

        let response = request.bearer_auth(&self.config.secret_key).send().await?;
        let status = response.status();
        let payload: Value = response.json().await?;

        if !status.is_success() {
            warn!(
                method,
                path,
                status = status.as_u16(),
                "payment vendor reported an error"
            );
            return Err(ProviderError::Vendor {
                status: status.as_u16(),
                payload,
            });
        }

        Ok(payload)
    }

    /// Unwrap a list payload's inner data collection from its pagination
    /// envelope
    pub(crate) fn into_list(payload: Value) -> Result<Vec<Value>> {
        match payload.get("data").and_then(Value::as_array) {
            Some(items) => Ok(items.clone()),
            None => Err(ProviderError::Parse(
                "list payload has no data collection".to_string(),
            )),
        }
    }
}
