use paymux_types::{Result, require_amount, require_id, require_str};
use serde_json::Value;

use crate::client::{DEFAULT_LIST_LIMIT, StripeClient};

/// Parameters for creating a charge
#[derive(Debug, Clone, Default)]
pub struct ChargeParams {
    /// Amount in minor currency units; must be a positive integer
    pub amount: Option<i64>,

    /// Three-letter currency code; defaults to "usd"
    pub currency: Option<String>,

    /// Opaque token identifying the payer's source
    pub source: Option<String>,
}

impl StripeClient {
    /// Create a charge.
    ///
    /// # Example
    /// ```ignore
    /// let charge = client
    ///     .create_transaction(ChargeParams {
    ///         amount: Some(500),
    ///         source: Some("tok_visa".into()),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// ```
    pub async fn create_transaction(&self, params: ChargeParams) -> Result<Value> {
        let amount = require_amount("amount", params.amount)?;
        let source = require_str("source", params.source.as_deref())?;
        let currency = params.currency.as_deref().unwrap_or("usd");

        let form = vec![
            ("amount".to_string(), amount.to_string()),
            ("currency".to_string(), currency.to_string()),
            ("source".to_string(), source.to_string()),
        ];
        self.post_form("/v1/charges", &form).await
    }

    /// Retrieve a charge by its identifier
    pub async fn get_transaction(&self, charge_id: &str) -> Result<Value> {
        let charge_id = require_id("charge id", charge_id)?;
        self.get(&format!("/v1/charges/{charge_id}"), &[]).await
    }

    /// List charges; `limit` defaults to 10
    pub async fn list_transactions(&self, limit: Option<u64>) -> Result<Vec<Value>> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let payload = self
            .get("/v1/charges", &[("limit".to_string(), limit.to_string())])
            .await?;
        Self::into_list(payload)
    }
}
