/// Environment variable naming the table the records live in
pub const RECORDS_TABLE_NAME: &str = "RECORDS_TABLE_NAME";
/// Table used when `RECORDS_TABLE_NAME` is not set
pub const DEFAULT_TABLE_NAME: &str = "records";
/// Optional endpoint override, e.g. a local DynamoDB emulator
pub const DYNAMODB_ENDPOINT_URL: &str = "DYNAMODB_ENDPOINT_URL";
/// Optional region override
pub const DYNAMODB_REGION: &str = "DYNAMODB_REGION";
/// Optional timeout in milliseconds applied to each table call
pub const RECORDS_TIMEOUT_MS: &str = "RECORDS_TIMEOUT_MS";
/// Either `dynamodb` or `memory`
pub const RECORDS_BACKEND: &str = "RECORDS_BACKEND";
