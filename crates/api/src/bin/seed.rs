//! One-shot importer: normalize an extracted-document feed file and seed the
//! Postgres record store.
//!
//! Usage: `ledgerview-seed <feed.json>` with `DATABASE_URL` set.

use ledgerview_ingest::normalize_feed;
use ledgerview_store::PostgresRecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ledgerview_observability::init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: ledgerview-seed <feed.json>"))?;
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let raw = std::fs::read_to_string(&path)?;
    let seeds = normalize_feed(&raw)?;
    tracing::info!(path, documents = seeds.len(), "normalized feed");

    let store = PostgresRecordStore::connect(&database_url).await?;
    store.ensure_schema().await?;
    let count = store.seed_documents(seeds).await?;

    tracing::info!(invoices = count, "seed complete");
    Ok(())
}
