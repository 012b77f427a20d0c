//! Template-mail vendor driver
//!
//! [`MandrillClient`] is the concrete [`TemplateRenderer`] for the template
//! vendor. Rendering composes two sequential vendor calls: a template lookup
//! by name, then a render of the looked-up template code with the caller's
//! merge variables. A lookup failure short-circuits the sequence; the render
//! call is never issued. Vendor error payloads surface to the caller
//! unchanged, and a successful render resolves with the rendered HTML only.
//!
//! # Example
//!
//! ```ignore
//! use paymux_driver_mandrill::{MandrillClient, MandrillConfig};
//! use paymux_types::{TemplateParams, TemplateRenderer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("MANDRILL_API_KEY")?;
//!     let client = MandrillClient::new(MandrillConfig::new(api_key));
//!
//!     let mut params = TemplateParams::new();
//!     params.insert("name".to_string(), "Ana".into());
//!
//!     let html = client.get_content("welcome", &params).await?;
//!     println!("{html}");
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use paymux_types::{
    MergeVar, ProviderError, Result, TemplateParams, TemplateRenderer, merge_vars_from,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Default production endpoint for the template vendor API
pub const DEFAULT_ENDPOINT: &str = "https://mandrillapp.com/api/1.0";

/// Configuration for a template-mail client instance.
///
/// The API key is an instance value, sent in the body of every vendor call.
#[derive(Debug, Clone)]
pub struct MandrillConfig {
    /// Base URL of the vendor API
    pub endpoint: String,

    /// Vendor API key
    pub api_key: String,
}

impl MandrillConfig {
    /// Create a configuration for the production endpoint with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different endpoint (a local test server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Serialize)]
struct TemplateInfoRequest<'a> {
    key: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct RenderRequest<'a> {
    key: &'a str,
    template_name: &'a str,
    template_content: &'a str,
    merge_vars: &'a [MergeVar],
}

/// Template-mail vendor client
#[derive(Debug, Clone)]
pub struct MandrillClient {
    config: MandrillConfig,
    http: reqwest::Client,
}

impl MandrillClient {
    /// Create a client from a configuration
    pub fn new(config: MandrillConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client for the production endpoint from an API key
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self::new(MandrillConfig::new(api_key))
    }

    /// Get the configuration this instance was built with
    pub fn config(&self) -> &MandrillConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint.trim_end_matches('/'), path)
    }

    /// Issue one vendor call and normalize its outcome: a vendor-reported
    /// failure surfaces the error body untouched, success resolves with the
    /// payload untouched.
    async fn call<T: Serialize>(&self, path: &str, request: &T) -> Result<Value> {
        debug!(path, "issuing template vendor request");

        let response = self.http.post(self.url(path)).json(request).send().await?;
        let status = response.status();
        let payload: Value = response.json().await?;

        if !status.is_success() {
            warn!(
                path,
                status = status.as_u16(),
                "template vendor reported an error"
            );
            return Err(ProviderError::Vendor {
                status: status.as_u16(),
                payload,
            });
        }

        Ok(payload)
    }
}

#[async_trait]
impl TemplateRenderer for MandrillClient {
    async fn get_content(&self, template_name: &str, params: &TemplateParams) -> Result<String> {
        let info = self
            .call(
                "/templates/info.json",
                &TemplateInfoRequest {
                    key: &self.config.api_key,
                    name: template_name,
                },
            )
            .await?;
        let code = info
            .get("code")
            .and_then(Value::as_str)
            .ok_or_else(|| ProviderError::Parse("template info payload has no code".to_string()))?;

        let merge_vars = merge_vars_from(params);
        let rendered = self
            .call(
                "/templates/render.json",
                &RenderRequest {
                    key: &self.config.api_key,
                    template_name,
                    template_content: code,
                    merge_vars: &merge_vars,
                },
            )
            .await?;

        rendered
            .get("html")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ProviderError::Parse("render payload has no html".to_string()))
    }
}

#[cfg(test)]
mod test;
