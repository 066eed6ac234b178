use async_trait::async_trait;
use http::request::Parts;
use paapi_core::hash::base64_hmac_sha256;
use paapi_core::utils::Redact;
use paapi_core::{
    Context, Error, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
    SigningRequest,
};

// Define a custom credential type
#[derive(Clone)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl std::fmt::Debug for MyCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MyCredential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Implement a credential loader that loads from environment
#[derive(Debug)]
struct MyCredentialLoader;

#[async_trait]
impl ProvideCredential for MyCredentialLoader {
    type Credential = MyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let api_key = ctx.env_var("MY_API_KEY").unwrap_or_default();
        let api_secret = ctx.env_var("MY_API_SECRET").unwrap_or_default();

        // For demo purposes, use dummy credentials if none are provided
        if api_key.is_empty() || api_secret.is_empty() {
            println!("No credentials found in environment, using demo credentials");
            return Ok(Some(MyCredential {
                api_key: "demo-api-key".to_string(),
                api_secret: "demo-api-secret".to_string(),
            }));
        }

        Ok(Some(MyCredential {
            api_key,
            api_secret,
        }))
    }
}

// Sign the sorted query string, the same shape the lookup signer uses.
#[derive(Debug)]
struct MyQuerySigner;

#[async_trait]
impl SignRequest for MyQuerySigner {
    type Credential = MyCredential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let mut ctx = SigningRequest::build(req)?;
        ctx.query_push("ApiKey", &cred.api_key);
        ctx.query_sort();

        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ctx.method,
            ctx.authority,
            ctx.path,
            SigningRequest::query_to_encoded_string(&ctx.query)
        );
        let signature = base64_hmac_sha256(cred.api_secret.as_bytes(), string_to_sign.as_bytes());
        ctx.query_push("Signature", signature);

        ctx.apply(req)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(OsEnv);
    let signer = Signer::new(ctx, MyCredentialLoader, MyQuerySigner);

    let mut parts = http::Request::builder()
        .method("GET")
        .uri("https://api.example.com/v1/items?Id=42")
        .body(())?
        .into_parts()
        .0;

    match signer.sign(&mut parts).await {
        Ok(_) => {
            println!("Request signed successfully!");
            println!("Uri: {}", parts.uri);
        }
        Err(e) => {
            eprintln!("Failed to sign request: {}", e);
        }
    }

    Ok(())
}
