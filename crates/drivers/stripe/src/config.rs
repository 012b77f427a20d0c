/// Default production endpoint for the payment vendor API
pub const DEFAULT_ENDPOINT: &str = "https://api.stripe.com";

/// Configuration for a payment client instance.
///
/// The secret key is an instance value, sent with every request; nothing is
/// bound to process-wide state.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Base URL of the vendor API
    pub endpoint: String,

    /// Secret API key
    pub secret_key: String,
}

impl StripeConfig {
    /// Create a configuration for the production endpoint with the given key
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            secret_key: secret_key.into(),
        }
    }

    /// Point the client at a different endpoint (sandbox or a local test
    /// server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
