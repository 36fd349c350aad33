use model::env::{DEFAULT_TABLE_NAME, RECORDS_BACKEND, RECORDS_TABLE_NAME, RECORDS_TIMEOUT_MS};
use model::Error;
use std::str::FromStr;
use std::time::Duration;
use store_dynamodb::ClientConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    DynamoDb,
    // Process-local tables, nothing is persisted
    Memory,
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(BackendKind::DynamoDb),
            "memory" => Ok(BackendKind::Memory),
            other => Err(format!("Unknown {RECORDS_BACKEND} value: {other}").into()),
        }
    }
}

/// Settings for the demo, resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub table_name: String,
    pub backend: BackendKind,
    pub timeout: Option<Duration>,
    pub client: ClientConfig,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let table_name: String = lookup(RECORDS_TABLE_NAME)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        let backend: BackendKind = match lookup(RECORDS_BACKEND) {
            Some(value) => value.parse()?,
            None => BackendKind::DynamoDb,
        };

        let timeout: Option<Duration> = lookup(RECORDS_TIMEOUT_MS)
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|err| format!("Invalid {RECORDS_TIMEOUT_MS} value {value}: {err}"))
            })
            .transpose()?;

        Ok(DemoConfig {
            table_name,
            backend,
            timeout,
            client: ClientConfig::from_lookup(&lookup),
        })
    }
}
