use crate::StoreErrorReason::{Connection, Create, Lookup, Marshal, NotFound, Unmarshal, Write};
use crate::StoreOperation::{EnsureTable, GetRecord, ListTables, PutRecord};
use crate::{Item, StoreError, TableBackend};
use aws_sdk_dynamodb::types::AttributeValue;
use model::{Error, Record, RECORD_ID};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Reads and writes [`Record`]s in a single table.
///
/// Holds nothing but the injected backend, the table name and an optional
/// timeout, so it is cheap to share. Failures are always returned to the
/// caller, who decides whether to abort.
pub struct RecordStore {
    backend: Arc<dyn TableBackend>,
    table_name: String,
    // Applied to every backend call when set
    timeout: Option<Duration>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn TableBackend>, table_name: impl Into<String>) -> Self {
        RecordStore {
            backend,
            table_name: table_name.into(),
            timeout: None,
        }
    }

    /// Fail any backend call which takes longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub async fn list_tables(&self) -> Result<Vec<String>, StoreError> {
        self.call(self.backend.list_tables())
            .await
            .map_err(|err| StoreError::new(self.table_name.clone(), ListTables, Connection(err)))
    }

    /// Create the table unless a table with the same name already exists.
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        let tables: Vec<String> = self
            .call(self.backend.list_tables())
            .await
            .map_err(|err| StoreError::new(self.table_name.clone(), EnsureTable, Connection(err)))?;

        if tables.iter().any(|name| name == &self.table_name) {
            tracing::info!(table = %self.table_name, "Table already present, skipping creation");
            return Ok(());
        }

        self.call(self.backend.create_table(&self.table_name, RECORD_ID))
            .await
            .map_err(|err| StoreError::new(self.table_name.clone(), EnsureTable, Create(err)))?;

        tracing::info!(table = %self.table_name, "Created table");

        Ok(())
    }

    /// Store the record, replacing any record with the same id.
    pub async fn put_record(&self, record: Record) -> Result<Record, StoreError> {
        if record.id().is_empty() {
            return Err(StoreError::new(
                String::new(),
                PutRecord,
                Marshal("record id must not be empty".to_string()),
            ));
        }

        let item: Item = serde_dynamo::to_item(&record).map_err(|err| {
            StoreError::new(record.id().to_string(), PutRecord, Marshal(err.to_string()))
        })?;

        tracing::debug!(table = %self.table_name, id = record.id(), "Putting record");

        self.call(self.backend.put_item(&self.table_name, item))
            .await
            .map_err(|err| StoreError::new(record.id().to_string(), PutRecord, Write(err)))?;

        Ok(record)
    }

    pub async fn get_record(&self, id: &str) -> Result<Record, StoreError> {
        if id.is_empty() {
            return Err(StoreError::new(
                String::new(),
                GetRecord,
                Marshal("record id must not be empty".to_string()),
            ));
        }

        let key: Item = Item::from([(RECORD_ID.to_string(), AttributeValue::S(id.to_string()))]);

        tracing::debug!(table = %self.table_name, id, "Getting record");

        let item: Item = self
            .call(self.backend.get_item(&self.table_name, key))
            .await
            .map_err(|err| StoreError::new(id.to_string(), GetRecord, Lookup(err)))?
            .ok_or_else(|| StoreError::new(id.to_string(), GetRecord, NotFound))?;

        serde_dynamo::from_item(item)
            .map_err(|err| StoreError::new(id.to_string(), GetRecord, Unmarshal(err.to_string())))
    }

    async fn call<T>(&self, request: impl Future<Output = Result<T, Error>>) -> Result<T, Error> {
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, request)
                .await
                .map_err(Error::from)?,
            None => request.await,
        }
    }
}
