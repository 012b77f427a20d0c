//! Shared types for the paymux vendor drivers.
//!
//! Every driver follows the same request contract: required arguments are
//! checked synchronously before any network call, exactly one vendor request
//! is issued per operation, and the vendor's response or error payload is
//! surfaced to the caller unchanged. This crate holds the pieces of that
//! contract the drivers share:
//!
//! - [`ProviderError`] / [`Result`] - the error surface of every operation
//! - [`validate`] - the fail-fast argument checks
//! - [`TemplateRenderer`] - the capability implemented by template-mail
//!   drivers

pub mod error;
pub mod renderer;
pub mod validate;

// Re-export main types at crate root
pub use error::{ProviderError, Result};
pub use renderer::{MergeVar, TemplateParams, TemplateRenderer, merge_vars_from};
pub use validate::{require_amount, require_field, require_id, require_str};
