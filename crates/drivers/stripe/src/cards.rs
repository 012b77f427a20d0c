use paymux_types::{Result, require_id, require_str};
use serde_json::Value;

use crate::client::StripeClient;
use crate::tokens::CardDetails;

impl StripeClient {
    /// Attach a card to a customer from raw card fields
    pub async fn create_card(&self, user_id: &str, card: CardDetails) -> Result<Value> {
        let user_id = require_id("user id", user_id)?;
        let number = require_str("card number", card.number.as_deref())?;
        let exp_month = require_str("expiration month", card.exp_month.as_deref())?;
        let exp_year = require_str("expiration year", card.exp_year.as_deref())?;
        let cvc = require_str("cvc", card.cvc.as_deref())?;

        let form = vec![
            ("source[object]".to_string(), "card".to_string()),
            ("source[number]".to_string(), number.to_string()),
            ("source[exp_month]".to_string(), exp_month.to_string()),
            ("source[exp_year]".to_string(), exp_year.to_string()),
            ("source[cvc]".to_string(), cvc.to_string()),
        ];
        self.post_form(&format!("/v1/customers/{user_id}/sources"), &form)
            .await
    }

    /// Retrieve one of a customer's cards
    pub async fn get_card(&self, user_id: &str, card_id: &str) -> Result<Value> {
        let user_id = require_id("user id", user_id)?;
        let card_id = require_id("card id", card_id)?;
        self.get(&format!("/v1/customers/{user_id}/sources/{card_id}"), &[])
            .await
    }

    /// Detach a card from a customer
    pub async fn delete_card(&self, user_id: &str, card_id: &str) -> Result<Value> {
        let user_id = require_id("user id", user_id)?;
        let card_id = require_id("card id", card_id)?;
        self.delete(&format!("/v1/customers/{user_id}/sources/{card_id}"))
            .await
    }

    /// List the cards attached to a customer
    pub async fn list_cards(&self, user_id: &str) -> Result<Vec<Value>> {
        let user_id = require_id("user id", user_id)?;
        let payload = self
            .get(
                &format!("/v1/customers/{user_id}/sources"),
                &[("object".to_string(), "card".to_string())],
            )
            .await?;
        Self::into_list(payload)
    }
}
