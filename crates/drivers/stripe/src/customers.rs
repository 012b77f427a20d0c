use indexmap::IndexMap;
use paymux_types::{Result, require_field, require_id, require_str};
use serde_json::Value;

use crate::client::{DEFAULT_LIST_LIMIT, StripeClient};

/// Parameters for creating a customer
#[derive(Debug, Clone, Default)]
pub struct CustomerParams {
    /// Contact email; required
    pub email: Option<String>,

    /// Arbitrary key/value annotations; required (an empty map is accepted)
    pub metadata: Option<IndexMap<String, String>>,

    /// Free-form description; defaults to the empty string
    pub description: Option<String>,
}

impl StripeClient {
    /// Create a customer.
    ///
    /// Resolves with the vendor's customer record, value for value.
    pub async fn create_user(&self, params: CustomerParams) -> Result<Value> {
        let email = require_str("email", params.email.as_deref())?;
        let metadata = require_field("metadata", params.metadata.as_ref())?;
        let description = params.description.as_deref().unwrap_or("");

        let mut form = vec![
            ("email".to_string(), email.to_string()),
            ("description".to_string(), description.to_string()),
        ];
        for (key, value) in metadata {
            form.push((format!("metadata[{key}]"), value.clone()));
        }
        self.post_form("/v1/customers", &form).await
    }

    /// Retrieve a customer by its identifier
    pub async fn get_user(&self, user_id: &str) -> Result<Value> {
        let user_id = require_id("user id", user_id)?;
        self.get(&format!("/v1/customers/{user_id}"), &[]).await
    }

    /// Update a customer record.
    ///
    /// Forwards the update fields as retrieval options on a fetch of the
    /// customer resource and resolves with the record the vendor returns.
    pub async fn update_user(
        &self,
        user_id: &str,
        update: Option<&IndexMap<String, String>>,
    ) -> Result<Value> {
        let user_id = require_id("user id", user_id)?;
        let update = require_field("update payload", update)?;

        let query: Vec<(String, String)> = update
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        self.get(&format!("/v1/customers/{user_id}"), &query).await
    }

    /// Delete a customer; the vendor flags the record rather than removing it
    pub async fn delete_user(&self, user_id: &str) -> Result<Value> {
        let user_id = require_id("user id", user_id)?;
        self.delete(&format!("/v1/customers/{user_id}")).await
    }

    /// List customers; `limit` defaults to 10
    pub async fn list_users(&self, limit: Option<u64>) -> Result<Vec<Value>> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let payload = self
            .get("/v1/customers", &[("limit".to_string(), limit.to_string())])
            .await?;
        Self::into_list(payload)
    }
}
