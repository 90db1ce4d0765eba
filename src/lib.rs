//! # sellerhub - a typed client for the Seller Hub API
//!
//! Seller Hub is a REST management API for the product listing and
//! publishing lifecycle: drafting products, curating their catalog
//! listings, pricing plans and support data, and walking them through the
//! approval, publish, suspend, and deprecate workflow.
//!
//! Every operation method on [`Client`] is a thin declaration: a path
//! template, its parameter bindings, and a result type, delegating to one
//! shared invocation pipeline that handles request assembly,
//! authentication, automatic retries with backoff, call-wide deadlines,
//! and uniform error classification.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sellerhub::{BearerTokenAuthenticator, Client, CreateProductOptions};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sellerhub::Error> {
//!     let mut client = Client::builder()
//!         .base_url("https://api.example.com")?
//!         .authenticator(Arc::new(BearerTokenAuthenticator::new("my-token")))
//!         .timeout(Duration::from_secs(30))
//!         .build()?;
//!
//!     // Retry transient failures: up to 4 retries within 30 seconds.
//!     client.enable_retries(4, Duration::from_secs(30));
//!
//!     let options = CreateProductOptions::new("My product", "SOFTWARE", "SOFTWARE")
//!         .material_agreement(true);
//!     let created = client.create_product(&options).await?;
//!     let product = created.result.expect("create returns a product");
//!     println!("created product {:?}", product.id);
//!
//!     let listed = client.list_products().await?;
//!     if let Some(listing) = listed.result {
//!         println!("{} products", listing.products.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! A call resolves to exactly one of a typed [`Response`] or a typed
//! [`Error`]. Non-2xx responses carrying the API's structured error
//! envelope become [`Error::Api`] with machine-readable diagnostics
//! (`code`, `serviceName`, `trid`, `operationName`); anything else non-2xx
//! becomes [`Error::Http`] with the raw body. A 2xx response with an empty
//! body is a success whose `result` is `None`.
//!
//! ```no_run
//! use sellerhub::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::builder().base_url("https://api.example.com")?.build()?;
//! match client.get_product("abc").await {
//!     Ok(response) => println!("{:?}", response.result),
//!     Err(Error::Api { status, code, trid, .. }) => {
//!         eprintln!("rejected ({status}), code {code:?}, transaction {trid:?}");
//!     }
//!     Err(e) => eprintln!("call failed: {e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Retries and deadlines
//!
//! Retries are off by default. When enabled, transport errors and
//! transient response statuses (429 and 5xx) are retried with jittered
//! exponential backoff, uniformly for every verb, including non-idempotent
//! writes such as publish or merge. A retried write whose first attempt
//! actually succeeded server-side can therefore apply twice; callers that
//! need at-most-once semantics must keep retries disabled and handle
//! recovery themselves.
//!
//! The [`ClientBuilder::timeout`](crate::ClientBuilder::timeout) deadline
//! bounds the whole call, retries and backoff included. When it fires the
//! call ends with [`Error::DeadlineExceeded`], even mid-backoff with
//! retry budget to spare.

mod approvals;
mod auth;
mod badges;
mod catalog;
mod client;
mod error;
pub mod models;
mod operation;
mod path;
mod plans;
mod products;
mod response;
mod retry;
mod support;

pub use auth::{Authenticator, BearerTokenAuthenticator, NoAuthAuthenticator};
pub use catalog::UpdateCatalogOptions;
pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use operation::Operation;
pub use plans::{CreatePlanOptions, UpdatePlanOptions};
pub use products::{CreateProductOptions, UpdateProductOptions};
pub use response::{RawResponse, Response};
pub use retry::RetryConfig;
pub use support::UpdateSupportOptions;
