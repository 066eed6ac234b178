use anyhow::Result;
use bytes::Bytes;
use paapi_core::{Context, RequestTimeout};
use paapi_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("paapi-example/0.1")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    // An unsigned lookup is rejected by the service, which is enough to see the transport work.
    let mut req = http::Request::builder()
        .method("GET")
        .uri("https://webservices.amazon.com/onca/xml?Service=AWSECommerceService")
        .body(Bytes::new())?;
    // Tighter deadline for this single call.
    req.extensions_mut()
        .insert(RequestTimeout(Duration::from_secs(5)));

    match ctx.http_send(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("Response headers:");
            for (name, value) in resp.headers() {
                println!("  {name}: {value:?}");
            }
            println!("\nResponse body:");
            println!("{}", String::from_utf8_lossy(resp.body()));
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
