use std::sync::Arc;

use crate::provide_credential::EnvCredentialProvider;
use crate::{Config, Credential};
use async_trait::async_trait;
use log::debug;
use paapi_core::{Context, ProvideCredential, Result, SigningCredential};

/// DefaultCredentialProvider will try to load the credential via the default chain.
///
/// Resolution order:
///
/// 1. Values set on [`Config`]
/// 2. Environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    config: Arc<Config>,
    env: EnvCredentialProvider,
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            env: EnvCredentialProvider::new(),
        }
    }

    fn load_via_config(&self) -> Option<Credential> {
        let (Some(ak), Some(sk), Some(tag)) = (
            &self.config.access_key_id,
            &self.config.secret_access_key,
            &self.config.associate_tag,
        ) else {
            return None;
        };

        let cred = Credential::new(ak, sk, tag);
        cred.is_valid().then_some(cred)
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        if let Some(cred) = self.load_via_config() {
            debug!("loaded credential from config");
            return Ok(Some(cred));
        }

        let cred = self.env.provide_credential(ctx).await?;
        if cred.is_some() {
            debug!("loaded credential from env");
        } else {
            debug!("no credential found in config or env");
        }
        Ok(cred)
    }
}
