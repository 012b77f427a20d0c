use paymux_types::Result;
use serde_json::Value;

use crate::client::StripeClient;

/// Parameters for creating a connected account.
///
/// The vendor expects an email when the account is not managed; that rule is
/// the vendor's to enforce and both fields pass through unvalidated.
#[derive(Debug, Clone, Default)]
pub struct AccountParams {
    /// Whether the platform manages the account
    pub managed: bool,

    /// Contact email for the account holder
    pub email: Option<String>,
}

impl StripeClient {
    /// Create a connected account
    pub async fn create_account(&self, params: AccountParams) -> Result<Value> {
        let mut form = vec![("managed".to_string(), params.managed.to_string())];
        if let Some(email) = params.email.as_deref() {
            form.push(("email".to_string(), email.to_string()));
        }
        self.post_form("/v1/accounts", &form).await
    }
}
