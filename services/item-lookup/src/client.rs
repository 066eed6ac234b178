use std::sync::Arc;

use bytes::Bytes;
use log::{debug, warn};
use paapi_core::utils::redact_signature;
use paapi_core::{Context, Error, ProvideCredential, RequestTimeout, Result, Signer};

use crate::decode::{decode, parse_error_response};
use crate::model::ItemLookupResponse;
use crate::{Config, Credential, LookupRequest, RequestSigner};

/// Client for the `ItemLookup` operation.
///
/// Holds the config and a [`Signer`] whose [`Context`] carries the HTTP
/// transport. Cloning is cheap and clones share the cached credential.
#[derive(Clone, Debug)]
pub struct Client {
    config: Arc<Config>,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a client signing with the current time.
    pub fn new(
        ctx: Context,
        config: Config,
        loader: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        Self::with_signer(config, Signer::new(ctx, loader, RequestSigner::new()))
    }

    /// Create a client from a prepared signer.
    pub fn with_signer(config: Config, signer: Signer<Credential>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            signer,
        })
    }

    /// The config of this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the signed `GET` request for `req`.
    pub async fn build_request(&self, req: &LookupRequest) -> Result<http::Request<Bytes>> {
        let (mut parts, body) = req
            .to_http_request(self.config.scheme(), self.config.endpoint())?
            .into_parts();
        self.signer.sign(&mut parts).await?;
        if let Some(timeout) = self.config.timeout {
            parts.extensions.insert(RequestTimeout(timeout));
        }

        debug!(
            "signed item lookup url: {}",
            redact_signature(&parts.uri.to_string())
        );
        Ok(http::Request::from_parts(parts, body))
    }

    /// The signed absolute url for `req`.
    pub async fn signed_url(&self, req: &LookupRequest) -> Result<String> {
        Ok(self.build_request(req).await?.uri().to_string())
    }

    /// Send the lookup and return the body as received.
    ///
    /// Non-2xx responses fail with `ServiceError`, enriched with the code and
    /// message of the service error document when the body is one.
    pub async fn item_lookup_raw(&self, req: &LookupRequest) -> Result<Bytes> {
        let http_req = self.build_request(req).await?;
        let resp = self.signer.context().http_send(http_req).await?;

        let status = resp.status();
        debug!("item lookup {} responded {status}", req.item_id);
        if status.is_success() {
            return Ok(resp.into_body());
        }

        let body = resp.into_body();
        let mut err = match parse_error_response(&body) {
            Some(v) => Error::service_error(format!(
                "item lookup failed with {}: {}",
                v.error.code, v.error.message
            ))
            .with_context(format!("code: {}", v.error.code))
            .with_context(format!("request_id: {}", v.request_id)),
            None => Error::service_error(format!("item lookup failed with status {status}"))
                .with_context(format!("body: {}", String::from_utf8_lossy(&body))),
        };
        err = err
            .with_context(format!("status: {status}"))
            .with_context(format!("item_id: {}", req.item_id));
        warn!("item lookup failed: {err}");

        Err(err)
    }

    /// Send the lookup and decode the response.
    pub async fn item_lookup(&self, req: &LookupRequest) -> Result<ItemLookupResponse> {
        let body = self.item_lookup_raw(req).await?;
        decode(&body).map_err(|e| e.with_context(format!("item_id: {}", req.item_id)))
    }
}
