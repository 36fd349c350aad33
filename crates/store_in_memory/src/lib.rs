use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use model::Error;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use store::{Item, TableBackend};

/// Tables held in process memory, mirroring what DynamoDB accepts and rejects
/// for a single string hash key.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    tables: Arc<Mutex<HashMap<String, InMemoryTable>>>,
}

struct InMemoryTable {
    partition_key: String,
    items: HashMap<String, Item>,
}

impl InMemoryBackend {
    /// Number of items currently stored in a table.
    pub fn item_count(&self, table_name: &str) -> Option<usize> {
        self.tables
            .lock()
            .ok()?
            .get(table_name)
            .map(|table| table.items.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, InMemoryTable>>, Error> {
        self.tables
            .lock()
            .map_err(|_| "in-memory tables lock poisoned".into())
    }
}

#[async_trait]
impl TableBackend for InMemoryBackend {
    async fn list_tables(&self) -> Result<Vec<String>, Error> {
        let mut names: Vec<String> = self.lock()?.keys().cloned().collect();
        names.sort();

        Ok(names)
    }

    async fn create_table(&self, table_name: &str, partition_key: &str) -> Result<(), Error> {
        let mut tables = self.lock()?;

        if tables.contains_key(table_name) {
            return Err(format!("Table already exists: {table_name}").into());
        }

        tracing::debug!(table = table_name, "Creating in-memory table");

        tables.insert(
            table_name.to_string(),
            InMemoryTable {
                partition_key: partition_key.to_string(),
                items: HashMap::new(),
            },
        );

        Ok(())
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), Error> {
        let mut tables = self.lock()?;
        let table: &mut InMemoryTable = tables
            .get_mut(table_name)
            .ok_or_else(|| missing_table(table_name))?;

        let key: String = key_value(&item, &table.partition_key)?;
        table.items.insert(key, item);

        Ok(())
    }

    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, Error> {
        let tables = self.lock()?;
        let table: &InMemoryTable = tables
            .get(table_name)
            .ok_or_else(|| missing_table(table_name))?;

        if key.len() != 1 {
            return Err("The provided key element does not match the schema".into());
        }
        let key: String = key_value(&key, &table.partition_key)?;

        Ok(table.items.get(&key).cloned())
    }
}

fn missing_table(table_name: &str) -> Error {
    format!("Requested resource not found: table {table_name}").into()
}

// Same rules DynamoDB applies to a string hash key
fn key_value(item: &Item, partition_key: &str) -> Result<String, Error> {
    match item.get(partition_key) {
        Some(AttributeValue::S(value)) if !value.is_empty() => Ok(value.clone()),
        Some(AttributeValue::S(_)) => {
            Err(format!("Key attribute {partition_key} must not be empty").into())
        }
        Some(_) => Err(format!("Key attribute {partition_key} must be a string").into()),
        None => Err(format!("Missing the key {partition_key} in the item").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> Item {
        Item::from([
            ("id".to_string(), AttributeValue::S(id.to_string())),
            ("name".to_string(), AttributeValue::S(name.to_string())),
        ])
    }

    fn key(id: &str) -> Item {
        Item::from([("id".to_string(), AttributeValue::S(id.to_string()))])
    }

    #[tokio::test]
    async fn create_table_rejects_duplicates() {
        let backend: InMemoryBackend = InMemoryBackend::default();

        backend
            .create_table("records", "id")
            .await
            .expect("First creation should succeed");

        assert!(backend.create_table("records", "id").await.is_err());
        assert_eq!(vec!["records".to_string()], backend.list_tables().await.unwrap());
    }

    #[tokio::test]
    async fn put_item_requires_table() {
        let backend: InMemoryBackend = InMemoryBackend::default();

        let result: Result<(), Error> = backend.put_item("records", item("1", "alice")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn put_item_requires_string_key() {
        let backend: InMemoryBackend = InMemoryBackend::default();
        backend.create_table("records", "id").await.unwrap();

        let mut numeric: Item = item("1", "alice");
        numeric.insert("id".to_string(), AttributeValue::N("1".to_string()));

        assert!(backend.put_item("records", numeric).await.is_err());
        assert!(backend.put_item("records", item("", "alice")).await.is_err());
        assert_eq!(Some(0), backend.item_count("records"));
    }

    #[tokio::test]
    async fn put_item_replaces_existing_key() {
        let backend: InMemoryBackend = InMemoryBackend::default();
        backend.create_table("records", "id").await.unwrap();

        backend.put_item("records", item("1", "alice")).await.unwrap();
        backend.put_item("records", item("1", "bob")).await.unwrap();

        let stored: Item = backend
            .get_item("records", key("1"))
            .await
            .unwrap()
            .expect("Item should exist");

        assert_eq!(Some(1), backend.item_count("records"));
        assert_eq!(
            Some(&AttributeValue::S("bob".to_string())),
            stored.get("name")
        );
    }

    #[tokio::test]
    async fn get_item_returns_none_for_missing_key() {
        let backend: InMemoryBackend = InMemoryBackend::default();
        backend.create_table("records", "id").await.unwrap();

        let result: Option<Item> = backend.get_item("records", key("missing")).await.unwrap();

        assert!(result.is_none());
    }
}
