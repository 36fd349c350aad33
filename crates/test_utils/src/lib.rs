use aws_sdk_dynamodb::operation::create_table::CreateTableOutput;
use aws_sdk_dynamodb::operation::get_item::GetItemOutput;
use aws_sdk_dynamodb::operation::list_tables::ListTablesOutput;
use aws_sdk_dynamodb::operation::put_item::PutItemOutput;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_smithy_mocks::{mock, mock_client, Rule, RuleMode};
use model::{RECORD_ID, RECORD_NAME};
use std::collections::HashMap;

/// Test table name
pub const TEST_TABLE: &str = "records";

/// The attribute map a record with this id and name is stored as
pub fn record_item(id: &str, name: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (RECORD_ID.to_string(), AttributeValue::S(id.to_string())),
        (RECORD_NAME.to_string(), AttributeValue::S(name.to_string())),
    ])
}

/// A default mock DynamoDB client against an empty account.
/// No tables are listed, every write succeeds and every lookup finds nothing.
pub fn create_mock_dynamodb_client() -> aws_sdk_dynamodb::Client {
    let list_tables_rule: Rule = mock!(aws_sdk_dynamodb::Client::list_tables)
        .match_requests(|_| true)
        .sequence()
        .output(|| ListTablesOutput::builder().build())
        .repeatedly()
        .build();
    let create_table_rule: Rule = mock!(aws_sdk_dynamodb::Client::create_table)
        .match_requests(|_| true)
        .sequence()
        .output(|| CreateTableOutput::builder().build())
        .repeatedly()
        .build();
    let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .repeatedly()
        .build();
    let get_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::get_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| GetItemOutput::builder().build())
        .repeatedly()
        .build();

    mock_client!(
        aws_sdk_dynamodb,
        RuleMode::MatchAny,
        [
            &list_tables_rule,
            &create_table_rule,
            &put_item_rule,
            &get_item_rule
        ]
    )
}
