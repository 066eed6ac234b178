use crate::{constants::*, Credential};
use async_trait::async_trait;
use paapi_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the credential from environment variables.
///
/// This provider looks for the following environment variables:
/// - `PAAPI_ACCESS_KEY_ID`: The access key id
/// - `PAAPI_SECRET_ACCESS_KEY`: The secret access key
/// - `PAAPI_ASSOCIATE_TAG`: The associate tag
///
/// All three must be present.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (
            envs.get(PAAPI_ACCESS_KEY_ID),
            envs.get(PAAPI_SECRET_ACCESS_KEY),
            envs.get(PAAPI_ASSOCIATE_TAG),
        ) {
            (Some(ak), Some(sk), Some(tag)) => Ok(Some(Credential::new(ak, sk, tag))),
            _ => Ok(None),
        }
    }
}
