use serde::{Deserialize, Serialize};

pub mod env;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Attribute holding the partition key of every record.
pub const RECORD_ID: &str = "id";
/// Attribute holding the record name.
pub const RECORD_NAME: &str = "name";

/// A single item in the records table.
///
/// The `id` is the partition key. It is fixed once the record is built,
/// so it is only readable through [`Record::id`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    pub name: String,
}

impl Record {
    /// Create a record with a freshly generated UUID v4 id.
    pub fn new(name: impl Into<String>) -> Self {
        Record {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    /// Create a record for a known id, e.g. to describe a lookup.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
