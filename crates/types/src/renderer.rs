use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Template parameters, keyed by placeholder name. The map's iteration order
/// is the order merge variables are sent to the vendor.
pub type TemplateParams = IndexMap<String, Value>;

/// A single placeholder substitution sent to the template vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeVar {
    /// Placeholder name
    pub name: String,
    /// Substitution value
    pub content: Value,
}

/// Capability for rendering a named template with substitution variables.
///
/// One concrete implementation exists per vendor; adding a vendor means
/// adding an implementation, not a subclass.
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    /// Render the named template with `params` and return the rendered HTML.
    async fn get_content(&self, template_name: &str, params: &TemplateParams) -> Result<String>;
}

/// Build the merge-variable list from `params`: one entry per key, pairing
/// the key's name with its value, in the mapping's iteration order.
pub fn merge_vars_from(params: &TemplateParams) -> Vec<MergeVar> {
    params
        .iter()
        .map(|(name, content)| MergeVar {
            name: name.clone(),
            content: content.clone(),
        })
        .collect()
}
