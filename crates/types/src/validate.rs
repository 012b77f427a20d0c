//! Fail-fast argument checks shared by the vendor drivers.
//!
//! Each helper runs synchronously before the driver issues its vendor
//! request; the first failing check aborts the operation with a
//! [`ProviderError::Validation`] naming the offending argument.

use crate::error::{ProviderError, Result};

/// Check that an identifier argument is non-empty.
pub fn require_id<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(ProviderError::Validation(format!("{field} is required")));
    }
    Ok(value)
}

/// Check that an optional string argument is present and non-empty.
pub fn require_str<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ProviderError::Validation(format!("{field} is required"))),
    }
}

/// Check that a required structured argument is present.
pub fn require_field<'a, T>(field: &str, value: Option<&'a T>) -> Result<&'a T> {
    value.ok_or_else(|| ProviderError::Validation(format!("{field} is required")))
}

/// Check that an amount is present and a positive number of minor units.
pub fn require_amount(field: &str, value: Option<i64>) -> Result<i64> {
    match value {
        Some(v) if v > 0 => Ok(v),
        Some(_) => Err(ProviderError::Validation(format!(
            "{field} must be a positive amount in minor units"
        ))),
        None => Err(ProviderError::Validation(format!("{field} is required"))),
    }
}
