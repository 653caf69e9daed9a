//! JSON records as grid rows.
//!
//! Every key of the first record becomes a text column, in file order, after
//! a selection column. Rows are identified by their `id` field when present.

use std::path::Path;

use datagrid::prelude::ColumnDef;
use serde_json::{Map, Value};

use crate::error::CliError;

pub type Record = Map<String, Value>;

pub const SELECTION_COLUMN: &str = "checkbox";
const ID_FIELD: &str = "id";

pub fn load(path: &Path) -> Result<Vec<Record>, CliError> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json)
}

pub fn parse(json: &str) -> Result<Vec<Record>, CliError> {
    let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
        return Err(CliError::NotAnArray);
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(CliError::NotAnObject(index)),
        })
        .collect()
}

pub fn columns(records: &[Record]) -> Vec<ColumnDef<Record>> {
    let mut columns = vec![ColumnDef::selection(SELECTION_COLUMN)];
    if let Some(first) = records.first() {
        columns.extend(first.keys().map(|key| {
            let field = key.clone();
            ColumnDef::accessor(key.as_str(), move |record: &Record| {
                display(record.get(&field))
            })
        }));
    }
    columns
}

/// The record's `id` field, or its position when it has none.
pub fn row_id(record: &Record, index: usize) -> String {
    match record.get(ID_FIELD) {
        None | Some(Value::Null) => index.to_string(),
        value => display(value),
    }
}

fn display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
