use std::mem;
use std::str::FromStr;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::Method;
use http::Uri;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

use crate::{Error, Result};

/// AsciiSet for RFC 3986 query encoding.
///
/// Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Signing context for request.
///
/// Query pairs are kept percent decoded until [`SigningRequest::apply`].
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// HTTP query parameters.
    pub query: Vec<(String, String)>,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    ///
    /// Query pairs are written in their current order and percent encoded
    /// with [`QUERY_ENCODE_SET`].
    pub fn apply(self, parts: &mut http::request::Parts) -> Result<()> {
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = {
                let paq = if self.query.is_empty() {
                    self.path
                } else {
                    let mut s = self.path;
                    s.push('?');
                    s.push_str(&Self::query_to_encoded_string(&self.query));
                    s
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Sort query pairs by key, then by value, in byte order.
    #[inline]
    pub fn query_sort(&mut self) {
        self.query.sort();
    }

    /// Convert query pairs to an encoded string in their current order.
    ///
    /// ```shell
    /// [(a, "b c"), (d, "e,f")] => "a=b%20c&d=e%2Cf"
    /// ```
    pub fn query_to_encoded_string(query: &[(String, String)]) -> String {
        let mut s = String::with_capacity(16);

        for (idx, (k, v)) in query.iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }

            s.extend(utf8_percent_encode(k, &QUERY_ENCODE_SET));
            s.push('=');
            s.extend(utf8_percent_encode(v, &QUERY_ENCODE_SET));
        }

        s
    }
}
