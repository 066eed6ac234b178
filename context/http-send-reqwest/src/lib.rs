//! [`HttpSend`] implementation backed by [`reqwest`].

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use paapi_core::{Error, HttpSend, RequestTimeout, Result};
use reqwest::{Client, Request};

/// ReqwestHttpSend sends lookups with a shared [`reqwest::Client`].
///
/// Configure pooling, proxies and a default timeout on the client itself.
/// A [`RequestTimeout`] extension on a request overrides the timeout for that call.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let timeout = req.extensions().get::<RequestTimeout>().copied();
        // Signed urls carry credentials in the query, only the host is reported.
        let host = req
            .uri()
            .authority()
            .map(|v| v.to_string())
            .unwrap_or_default();

        let mut req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request for reqwest")
                .with_source(e)
                .with_context(format!("host: {host}"))
        })?;
        if let Some(RequestTimeout(d)) = timeout {
            *req.timeout_mut() = Some(d);
        }

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| {
                Error::transport("failed to send http request")
                    .with_source(e.without_url())
                    .with_context(format!("host: {host}"))
            })?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read http response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
