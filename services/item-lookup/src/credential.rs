use paapi_core::utils::Redact;
use paapi_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access key, secret key and associate tag.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Access key id of the Product Advertising API account.
    pub access_key_id: String,
    /// Secret access key used as the HMAC key.
    pub secret_access_key: String,
    /// Associate (partner) tag every request is attributed to.
    pub associate_tag: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key_id: &str, secret_access_key: &str, associate_tag: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            associate_tag: associate_tag.to_string(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("associate_tag", &self.associate_tag)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty()
            && !self.secret_access_key.is_empty()
            && !self.associate_tag.is_empty()
    }
}
