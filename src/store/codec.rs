//! On-disk form of the budget collection.
//!
//! Current format: `{"version": 1, "budgets": [...]}`. Collections written
//! before versioning are a bare JSON array, and `null` stands for "never
//! written"; both are still read.

use serde::Serialize;
use serde_json::Value;

use crate::models::BudgetRecord;
use crate::storage::PersistenceError;

pub(crate) const FORMAT_VERSION: u64 = 1;

#[derive(Serialize)]
struct Envelope<'a> {
    version: u64,
    budgets: &'a [BudgetRecord],
}

pub(crate) fn encode(records: &[BudgetRecord]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&Envelope {
        version: FORMAT_VERSION,
        budgets: records,
    })?)
}

pub(crate) fn decode(text: &str) -> Result<Vec<BudgetRecord>, PersistenceError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value =
        serde_json::from_str(text).map_err(|e| PersistenceError::Decode(e.to_string()))?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => records_from(value),
        Value::Object(mut map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| PersistenceError::Decode("missing format version".into()))?;
            if version > FORMAT_VERSION {
                return Err(PersistenceError::Decode(format!(
                    "format version {version} is newer than supported version {FORMAT_VERSION}"
                )));
            }
            match map.remove("budgets") {
                Some(budgets) => records_from(budgets),
                None => Err(PersistenceError::Decode("missing budgets list".into())),
            }
        }
        other => Err(PersistenceError::Decode(format!(
            "expected a list of budgets, found {other}"
        ))),
    }
}

fn records_from(value: Value) -> Result<Vec<BudgetRecord>, PersistenceError> {
    serde_json::from_value(value).map_err(|e| PersistenceError::Decode(e.to_string()))
}
