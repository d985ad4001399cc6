use std::sync::Arc;

use ledgerview_chat::{ChatResponder, MockResponder, ProxyResponder, UnconfiguredResponder};
use ledgerview_store::{InMemoryRecordStore, PostgresRecordStore, RecordProvider};

use crate::config::{ChatMode, Config};

/// Shared application services, injected into handlers via `Extension`.
pub struct AppServices {
    pub records: Arc<dyn RecordProvider>,
    pub chat: Arc<dyn ChatResponder>,
}

/// Wire up the record provider and chat responder from configuration.
///
/// Record source precedence: `DATABASE_URL`, then `FIXTURE_PATH`, then an
/// empty in-memory store. Chat: proxy when configured, mock otherwise; a
/// proxy mode with no upstream gets a responder that reports the missing
/// configuration on every question instead of failing startup.
pub async fn build_services(config: &Config) -> anyhow::Result<AppServices> {
    let records: Arc<dyn RecordProvider> = if let Some(url) = &config.database_url {
        let store = PostgresRecordStore::connect(url).await?;
        store.ensure_schema().await?;
        tracing::info!("record provider: postgres");
        Arc::new(store)
    } else if let Some(path) = &config.fixture_path {
        let store = InMemoryRecordStore::load_fixture(path)?;
        tracing::info!(path, "record provider: in-memory fixture");
        Arc::new(store)
    } else {
        tracing::warn!("no DATABASE_URL or FIXTURE_PATH set; serving an empty record set");
        Arc::new(InMemoryRecordStore::new())
    };

    let chat: Arc<dyn ChatResponder> = match config.chat_mode {
        ChatMode::Mock => {
            tracing::info!("chat responder: mock");
            Arc::new(MockResponder)
        }
        ChatMode::Proxy => match &config.chat_api_base_url {
            Some(base_url) => {
                let api_key = config.chat_api_key.clone().unwrap_or_default();
                tracing::info!(base_url, "chat responder: proxy");
                Arc::new(ProxyResponder::new(base_url.clone(), api_key)?)
            }
            None => {
                tracing::warn!("chat mode is proxy but CHAT_API_BASE_URL is not set");
                Arc::new(UnconfiguredResponder)
            }
        },
    };

    Ok(AppServices { records, chat })
}
