//! Product Advertising API request signature (version 2)
use std::fmt::Write;

use async_trait::async_trait;
use http::Method;
use log::debug;
use paapi_core::hash::base64_hmac_sha256;
use paapi_core::time::{format_iso8601, now, DateTime};
use paapi_core::{Context, Error, Result, SignRequest, SigningRequest};

use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements the Product Advertising API signature.
///
/// - [Example REST Requests](https://webservices.amazon.com/paapi5/documentation/)
///
/// The signer adds `Service`, `AWSAccessKeyId`, `AssociateTag` and `Timestamp`
/// to the query already present on the request, sorts all pairs, and appends
/// `Signature`.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        if parts.method != Method::GET {
            return Err(Error::request_invalid("only GET requests can be signed")
                .with_context(format!("method: {}", parts.method)));
        }
        let now = self.time.unwrap_or_else(now);

        let mut ctx = SigningRequest::build(parts)?;

        // Drop anything a previous signing left behind.
        ctx.query.retain(|(k, _)| {
            !matches!(
                k.as_str(),
                PARAM_SERVICE
                    | PARAM_ACCESS_KEY_ID
                    | PARAM_ASSOCIATE_TAG
                    | PARAM_TIMESTAMP
                    | PARAM_SIGNATURE
            )
        });
        ctx.query_push(PARAM_SERVICE, SERVICE_NAME);
        ctx.query_push(PARAM_ACCESS_KEY_ID, &cred.access_key_id);
        ctx.query_push(PARAM_ASSOCIATE_TAG, &cred.associate_tag);
        ctx.query_push(PARAM_TIMESTAMP, format_iso8601(now));
        ctx.query_sort();

        let string_to_sign = string_to_sign(&ctx)?;
        let signature =
            base64_hmac_sha256(cred.secret_access_key.as_bytes(), string_to_sign.as_bytes());
        ctx.query_push(PARAM_SIGNATURE, signature);

        ctx.apply(parts)
    }
}

/// Encode and sort query pairs into the canonical query string.
///
/// Keys are ordered by byte value, pairs joined by `&`, key and value by `=`,
/// every byte except `A-Z a-z 0-9 - . _ ~` percent encoded.
pub fn canonical_query_string(query: &[(String, String)]) -> String {
    let mut query = query.to_vec();
    query.sort();
    SigningRequest::query_to_encoded_string(&query)
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// "GET" + "\n" +
/// lowercase(Host) + "\n" +
/// HTTPRequestURI + "\n" +
/// CanonicalizedQueryString
/// ```
fn string_to_sign(ctx: &SigningRequest) -> Result<String> {
    let mut s = String::new();
    writeln!(&mut s, "{}", ctx.method.as_str())?;
    writeln!(&mut s, "{}", ctx.authority.as_str().to_ascii_lowercase())?;
    writeln!(&mut s, "{}", ctx.path)?;
    write!(&mut s, "{}", canonical_query_string(&ctx.query))?;

    debug!("string to sign: {}", &s);
    Ok(s)
}
