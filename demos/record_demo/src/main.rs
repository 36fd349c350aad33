use crate::config::{BackendKind, DemoConfig};
use model::{Error, Record};
use std::sync::Arc;
use store::{RecordStore, StoreError, TableBackend};
use store_dynamodb::DynamoDbBackend;
use store_in_memory::InMemoryBackend;
use tracing_subscriber::EnvFilter;

mod config;

/// Lists tables, makes sure the records table exists, then writes a new
/// record and reads it back.
async fn run(store: &RecordStore) -> Result<Record, StoreError> {
    let tables: Vec<String> = store.list_tables().await?;
    tracing::info!(?tables, "Connected to database");

    store.ensure_table().await?;

    let inserted: Record = store.put_record(Record::new("test_user")).await?;
    tracing::info!(id = inserted.id(), "Inserted record");

    let fetched: Record = store.get_record(inserted.id()).await?;
    tracing::info!(?fetched, "Fetched record");

    Ok(fetched)
}

async fn backend(config: &DemoConfig) -> Arc<dyn TableBackend> {
    match config.backend {
        BackendKind::DynamoDb => {
            Arc::new(DynamoDbBackend::new(config.client.build_client().await))
        }
        BackendKind::Memory => Arc::new(InMemoryBackend::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config: DemoConfig = DemoConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let mut store: RecordStore = RecordStore::new(backend(&config).await, config.table_name);
    if let Some(timeout) = config.timeout {
        store = store.with_timeout(timeout);
    }

    if let Err(err) = run(&store).await {
        tracing::error!(error = %err, "Record demo failed");
        return Err(err.into());
    }

    Ok(())
}
