use std::time::Duration;

use paapi_core::{Context, Error, Result};

use super::constants::*;

/// Config carries all the configuration for the item lookup client.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PAAPI_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PAAPI_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `associate_tag` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PAAPI_ASSOCIATE_TAG`]
    pub associate_tag: Option<String>,
    /// `endpoint` is the host requests are sent to and signed for, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PAAPI_ENDPOINT`]
    /// - default to `webservices.amazon.com`
    pub endpoint: Option<String>,
    /// `scheme` of the request url, `http` or `https`.
    ///
    /// - default to `https`
    pub scheme: Option<String>,
    /// Deadline applied to every lookup call by the transport.
    ///
    /// `None` leaves it to the configured HTTP client.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(PAAPI_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PAAPI_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PAAPI_ASSOCIATE_TAG) {
            self.associate_tag.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PAAPI_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }

        self
    }

    /// The host lookups are signed for.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// The scheme of the lookup url.
    pub fn scheme(&self) -> &str {
        self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME)
    }

    /// Check the config can be used to build request urls.
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint();
        if endpoint.is_empty() {
            return Err(Error::config_invalid("endpoint must not be empty"));
        }
        if endpoint.contains(['/', '?', '#', ' ']) {
            return Err(Error::config_invalid("endpoint must be a bare host")
                .with_context(format!("endpoint: {endpoint}")));
        }
        match self.scheme() {
            "http" | "https" => Ok(()),
            v => Err(Error::config_invalid("scheme must be http or https")
                .with_context(format!("scheme: {v}"))),
        }
    }
}
