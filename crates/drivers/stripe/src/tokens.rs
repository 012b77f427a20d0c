use paymux_types::{Result, require_id, require_str};
use serde_json::Value;

use crate::client::StripeClient;

/// Raw card fields used to mint a single-use token or attach a card.
///
/// No format checks are applied beyond presence; the vendor owns card
/// validation. Card data is forwarded once and never stored.
#[derive(Debug, Clone, Default)]
pub struct CardDetails {
    /// Primary account number
    pub number: Option<String>,

    /// Card verification code
    pub cvc: Option<String>,

    /// Expiration month
    pub exp_month: Option<String>,

    /// Expiration year
    pub exp_year: Option<String>,
}

impl StripeClient {
    /// Create a single-use token from raw card fields
    pub async fn create_token(&self, card: CardDetails) -> Result<Value> {
        let number = require_str("card number", card.number.as_deref())?;
        let cvc = require_str("cvc", card.cvc.as_deref())?;
        let exp_month = require_str("expiration month", card.exp_month.as_deref())?;
        let exp_year = require_str("expiration year", card.exp_year.as_deref())?;

        let form = vec![
            ("card[number]".to_string(), number.to_string()),
            ("card[cvc]".to_string(), cvc.to_string()),
            ("card[exp_month]".to_string(), exp_month.to_string()),
            ("card[exp_year]".to_string(), exp_year.to_string()),
        ];
        self.post_form("/v1/tokens", &form).await
    }

    /// Retrieve a token by its identifier
    pub async fn get_token(&self, token_id: &str) -> Result<Value> {
        let token_id = require_id("token id", token_id)?;
        self.get(&format!("/v1/tokens/{token_id}"), &[]).await
    }
}
