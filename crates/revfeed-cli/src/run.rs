//! Command handlers: one straight-line run per feed.
//!
//! Any fetch, parse, or write failure aborts the run before the output file
//! is touched.

use std::path::Path;

use revfeed_core::{AppConfig, FeedKind};
use revfeed_feed::{build_order_payload, build_product_payload, write_json, FeedClient};
use serde::Serialize;

use crate::RunArgs;

/// Fetch the order review feed and write it newest first.
pub(crate) async fn run_orders(config: &AppConfig, args: &RunArgs) -> anyhow::Result<()> {
    let xml = fetch_feed(config, FeedKind::Orders).await?;
    let payload = build_order_payload(&xml, chrono::Utc::now().timestamp())?;
    finish(config, FeedKind::Orders, args, &payload, &payload.summary())
}

/// Fetch the product review feed, deduplicate, and write it ordered by the
/// most recently reviewed product.
pub(crate) async fn run_products(config: &AppConfig, args: &RunArgs) -> anyhow::Result<()> {
    let xml = fetch_feed(config, FeedKind::Products).await?;
    let payload = build_product_payload(&xml, chrono::Utc::now().timestamp())?;
    finish(config, FeedKind::Products, args, &payload, &payload.summary())
}

async fn fetch_feed(config: &AppConfig, kind: FeedKind) -> anyhow::Result<String> {
    let client = FeedClient::from_config(config, kind)?;
    Ok(client.fetch(kind).await?)
}

fn finish<T: Serialize>(
    config: &AppConfig,
    kind: FeedKind,
    args: &RunArgs,
    payload: &T,
    summary: &str,
) -> anyhow::Result<()> {
    let path = output_path(config, kind, args);

    if args.dry_run {
        println!("dry-run: would save {summary} -> {}", path.display());
        return Ok(());
    }

    write_json(path, payload)?;
    println!("OK: saved {summary} -> {}", path.display());
    Ok(())
}

/// `--output` when given, otherwise the configured path for `kind`.
pub(crate) fn output_path<'a>(config: &'a AppConfig, kind: FeedKind, args: &'a RunArgs) -> &'a Path {
    args.output
        .as_deref()
        .unwrap_or_else(|| config.output_path(kind))
}
