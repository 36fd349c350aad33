use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use model::Error;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

mod record_store;

pub use record_store::RecordStore;

/// Native attribute map of a single item, also used for keys.
pub type Item = HashMap<String, AttributeValue>;

/// The primitive remote calls a key-value table service offers.
///
/// `RecordStore` only ever talks to the database through this trait, so the
/// DynamoDB client can be swapped for an in-memory table in tests.
/// Every call is a single round trip with no retries.
#[async_trait]
pub trait TableBackend: Send + Sync {
    /// Names of the tables visible to the caller. Only the first page is read.
    async fn list_tables(&self) -> Result<Vec<String>, Error>;

    /// Create a table keyed on a single string hash key, billed on demand.
    async fn create_table(&self, table_name: &str, partition_key: &str) -> Result<(), Error>;

    /// Unconditionally store the item, replacing any item with the same key.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), Error>;

    /// Point lookup. `None` when no item exists for the key.
    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, Error>;
}

/// Errors arising from table and record operations.
#[derive(Debug)]
pub struct StoreError {
    /// The table name for table operations, otherwise the record id.
    pub key: String,

    pub operation: StoreOperation,
    pub reason: StoreErrorReason,
}

#[derive(Debug)]
pub enum StoreErrorReason {
    // The service couldn't be reached to list tables
    Connection(Error),
    // The service rejected the table creation
    Create(Error),
    // The record or key couldn't be turned into attributes
    Marshal(String),
    // The service rejected the write
    Write(Error),
    // The lookup call itself failed
    Lookup(Error),
    // No item exists for the key
    NotFound,
    // The stored item isn't a valid record
    Unmarshal(String),
}

/// Fieldless view of [`StoreErrorReason`] for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Connection,
    Create,
    Marshal,
    Write,
    Lookup,
    NotFound,
    Unmarshal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    ListTables,
    EnsureTable,
    PutRecord,
    GetRecord,
}

impl StoreError {
    pub fn new(key: String, operation: StoreOperation, reason: StoreErrorReason) -> Self {
        StoreError {
            key,
            operation,
            reason,
        }
    }

    pub fn kind(&self) -> StoreErrorKind {
        match self.reason {
            StoreErrorReason::Connection(_) => StoreErrorKind::Connection,
            StoreErrorReason::Create(_) => StoreErrorKind::Create,
            StoreErrorReason::Marshal(_) => StoreErrorKind::Marshal,
            StoreErrorReason::Write(_) => StoreErrorKind::Write,
            StoreErrorReason::Lookup(_) => StoreErrorKind::Lookup,
            StoreErrorReason::NotFound => StoreErrorKind::NotFound,
            StoreErrorReason::Unmarshal(_) => StoreErrorKind::Unmarshal,
        }
    }

    /// Whether the record simply doesn't exist yet.
    pub fn is_not_found(&self) -> bool {
        self.kind() == StoreErrorKind::NotFound
    }
}

impl Display for StoreOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name: &str = match self {
            StoreOperation::ListTables => "list tables",
            StoreOperation::EnsureTable => "ensure table",
            StoreOperation::PutRecord => "put record",
            StoreOperation::GetRecord => "get record",
        };

        f.write_str(name)
    }
}

impl Display for StoreErrorReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreErrorReason::Connection(err) => write!(f, "could not reach the service: {err}"),
            StoreErrorReason::Create(err) => write!(f, "could not create table: {err}"),
            StoreErrorReason::Marshal(msg) => write!(f, "could not encode attributes: {msg}"),
            StoreErrorReason::Write(err) => write!(f, "could not write item: {err}"),
            StoreErrorReason::Lookup(err) => write!(f, "could not read item: {err}"),
            StoreErrorReason::NotFound => f.write_str("item not found"),
            StoreErrorReason::Unmarshal(msg) => write!(f, "could not decode item: {msg}"),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] failed, {}", self.operation, self.key, self.reason)
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            StoreErrorReason::Connection(err)
            | StoreErrorReason::Create(err)
            | StoreErrorReason::Write(err)
            | StoreErrorReason::Lookup(err) => Some(&**err),
            _ => None,
        }
    }
}
