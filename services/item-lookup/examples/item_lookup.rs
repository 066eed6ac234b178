//! Look up one item and print a short summary.
//!
//! ```bash
//! export PAAPI_ACCESS_KEY_ID=...
//! export PAAPI_SECRET_ACCESS_KEY=...
//! export PAAPI_ASSOCIATE_TAG=...
//! cargo run --example item_lookup -- 0439708184 Large,Offers
//! ```

use std::env;
use std::time::Duration;

use paapi_core::{Context, OsEnv};
use paapi_http_send_reqwest::ReqwestHttpSend;
use paapi_item_lookup::{Client, Config, DefaultCredentialProvider, LookupRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut args = env::args().skip(1);
    let item_id = args.next().unwrap_or_else(|| "0439708184".to_string());
    let groups = args.next().unwrap_or_else(|| "Large".to_string());

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config {
        timeout: Some(Duration::from_secs(10)),
        ..Default::default()
    }
    .from_env(&ctx);
    let loader = DefaultCredentialProvider::new(config.clone().into());
    let client = Client::new(ctx, config, loader)?;

    let req = LookupRequest::asin(&item_id).with_response_groups(groups.split(','));
    let resp = client.item_lookup(&req).await?;

    for err in resp.errors() {
        println!("service error {}: {}", err.code, err.message);
    }
    let Some(item) = resp.item() else {
        println!("no item returned for {item_id}");
        return Ok(());
    };

    println!("{} {}", item.asin, item.item_attributes.title);
    println!("  list price: {}", item.item_attributes.list_price.formatted_price);
    println!(
        "  lowest new: {} ({} offers)",
        item.offer_summary.lowest_new_price.formatted_price, item.offer_summary.total_new
    );
    for node in &item.browse_nodes {
        let path: Vec<&str> = node.ancestry().map(|n| n.name.as_str()).collect();
        println!("  category: {}", path.join(" < "));
    }

    Ok(())
}
