//! Product Advertising API `ItemLookup` client.
//!
//! This crate signs `ItemLookup` requests with the service's HMAC-SHA256 query
//! signature, sends them through the transport held by a
//! [`paapi_core::Context`], and decodes the XML response into
//! [`ItemLookupResponse`].
//!
//! ## Overview
//!
//! A request is signed by adding `Service`, `AWSAccessKeyId`, `AssociateTag`
//! and `Timestamp` to the lookup parameters, sorting the percent encoded pairs
//! by key, and computing a base64 HMAC-SHA256 over
//!
//! ```text
//! GET
//! webservices.amazon.com
//! /onca/xml
//! AWSAccessKeyId=...&AssociateTag=...&IdType=ASIN&ItemId=...
//! ```
//!
//! The result is appended as the `Signature` parameter.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paapi_core::{Context, OsEnv, Result};
//! use paapi_http_send_reqwest::ReqwestHttpSend;
//! use paapi_item_lookup::{Client, Config, DefaultCredentialProvider, LookupRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let config = Config::default().from_env(&ctx);
//!     let loader = DefaultCredentialProvider::new(config.clone().into());
//!     let client = Client::new(ctx, config, loader)?;
//!
//!     let resp = client
//!         .item_lookup(&LookupRequest::asin("0439708184").with_response_group("Large"))
//!         .await?;
//!     if let Some(item) = resp.item() {
//!         println!("{}: {}", item.asin, item.item_attributes.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export PAAPI_ACCESS_KEY_ID=your-access-key-id
//! export PAAPI_SECRET_ACCESS_KEY=your-secret-access-key
//! export PAAPI_ASSOCIATE_TAG=your-associate-tag
//! # optional, defaults to webservices.amazon.com
//! export PAAPI_ENDPOINT=webservices.amazon.co.uk
//! ```
//!
//! ## Raw responses
//!
//! [`Client::item_lookup_raw`] returns the body untouched for callers that
//! keep their own model; [`decode`] turns such a body into the typed tree
//! later.

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod lookup;
pub use lookup::LookupRequest;

mod sign_request;
pub use sign_request::canonical_query_string;
pub use sign_request::RequestSigner;

mod model;
pub use model::*;

mod decode;
pub use decode::decode;
pub use decode::parse_error_response;

mod client;
pub use client::Client;
