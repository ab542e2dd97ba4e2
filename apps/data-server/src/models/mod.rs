use serde::Serialize;
use serde_json::{Map, Value};

/// The first row of the `test` table, mapped positionally: column 0 is `id`,
/// column 1 is `data`. Values keep whatever storage class SQLite holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRow {
    pub id: Value,
    pub data: Value,
}

/// Body of `GET /get-data/`: the row, or `{}` when the table is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataResponse {
    Row(TestRow),
    Empty(Map<String, Value>),
}

impl From<Option<TestRow>> for DataResponse {
    fn from(row: Option<TestRow>) -> Self {
        match row {
            Some(row) => DataResponse::Row(row),
            None => DataResponse::Empty(Map::new()),
        }
    }
}
