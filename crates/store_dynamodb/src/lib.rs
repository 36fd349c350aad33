use async_trait::async_trait;
use aws_sdk_dynamodb::operation::get_item::GetItemOutput;
use aws_sdk_dynamodb::operation::list_tables::ListTablesOutput;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use model::Error;
use store::{Item, TableBackend};

mod client_config;

pub use client_config::ClientConfig;

/// [`TableBackend`] over the DynamoDB API.
pub struct DynamoDbBackend {
    dynamodb_client: aws_sdk_dynamodb::Client,
    consistent_read: bool,
}

impl DynamoDbBackend {
    /// Lookups are strongly consistent unless changed with `with_consistent_read`.
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client) -> Self {
        DynamoDbBackend {
            dynamodb_client,
            consistent_read: true,
        }
    }

    pub fn with_consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = consistent_read;
        self
    }
}

#[async_trait]
impl TableBackend for DynamoDbBackend {
    async fn list_tables(&self) -> Result<Vec<String>, Error> {
        let output: ListTablesOutput = self
            .dynamodb_client
            .list_tables()
            .send()
            .await
            .map_err(|err| err.into_service_error())?;

        Ok(output.table_names.unwrap_or_default())
    }

    async fn create_table(&self, table_name: &str, partition_key: &str) -> Result<(), Error> {
        let attribute: AttributeDefinition = AttributeDefinition::builder()
            .attribute_name(partition_key)
            .attribute_type(ScalarAttributeType::S)
            .build()?;
        let key: KeySchemaElement = KeySchemaElement::builder()
            .attribute_name(partition_key)
            .key_type(KeyType::Hash)
            .build()?;

        tracing::debug!(table = table_name, partition_key, "Sending CreateTable");

        self.dynamodb_client
            .create_table()
            .table_name(table_name)
            .attribute_definitions(attribute)
            .key_schema(key)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|err| err.into_service_error())?;

        Ok(())
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), Error> {
        self.dynamodb_client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|err| err.into_service_error())?;

        Ok(())
    }

    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, Error> {
        let output: GetItemOutput = self
            .dynamodb_client
            .get_item()
            .table_name(table_name)
            .consistent_read(self.consistent_read)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|err| err.into_service_error())?;

        Ok(output.item)
    }
}
