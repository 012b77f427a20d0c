//! Payment vendor driver
//!
//! This crate wraps the payment processor's HTTP API behind [`StripeClient`],
//! a client that normalizes every operation to the same contract:
//!
//! 1. Required arguments are checked synchronously, in declaration order;
//!    the first failing check returns a validation error naming the argument
//!    and no request is issued.
//! 2. Exactly one vendor request is sent. There are no retries and no
//!    caching; each call is a stateless pass-through.
//! 3. A vendor-reported failure surfaces the vendor's error body unchanged;
//!    success resolves with the vendor's response payload unchanged. List
//!    operations resolve with the inner data collection rather than the
//!    pagination envelope.
//!
//! The API key is held per client instance and sent on every request, so
//! independently keyed clients can coexist in one process.
//!
//! # Quick Start
//!
//! ```ignore
//! use paymux_driver_stripe::{ChargeParams, StripeClient, StripeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("STRIPE_SECRET_KEY")?;
//!     let client = StripeClient::new(StripeConfig::new(api_key));
//!
//!     let charge = client
//!         .create_transaction(ChargeParams {
//!             amount: Some(500),
//!             source: Some("tok_visa".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("created charge {}", charge["id"]);
//!
//!     Ok(())
//! }
//! ```

pub mod accounts;
pub mod cards;
pub mod charges;
pub mod client;
pub mod config;
pub mod customers;
pub mod tokens;

// Re-export main types at crate root
pub use accounts::AccountParams;
pub use charges::ChargeParams;
pub use client::StripeClient;
pub use config::StripeConfig;
pub use customers::CustomerParams;
pub use tokens::CardDetails;
