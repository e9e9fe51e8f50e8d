use serde::Deserialize;
use serde_json::Value;

use crate::engine::{Transaction, parse_date};

/// One raw operation as found in the source document.
/// Every key is optional and may hold any JSON value, so deserialising an
/// object into it never fails.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct InputRecord {
    pub id: Value,
    pub state: Value,
    pub date: Value,
    #[serde(rename = "operationAmount")]
    pub operation_amount: Value,
    pub description: Value,
    pub from: Value,
    pub to: Value,
}

impl InputRecord {
    pub fn to_transaction(&self) -> Transaction {
        let amount = self.operation_amount.get("amount");
        let currency = self
            .operation_amount
            .get("currency")
            .and_then(|c| c.get("name"));

        Transaction {
            id: text_of(&self.id),
            state: text_of(&self.state),
            date: parse_date(self.date.as_str()),
            amount: amount.map(text_of).unwrap_or_default(),
            currency: currency.map(text_of).unwrap_or_default(),
            description: text_of(&self.description),
            from_account: text_of(&self.from),
            to_account: text_of(&self.to),
        }
    }
}

/// Lenient coercion of a JSON value into display text.
/// `null` becomes an empty string, strings are taken as-is and everything
/// else is rendered as compact JSON, so booleans read `true`/`false`.
/// Integers beyond the `u64`/`i64` range are held as `f64` by `serde_json`
/// and lose precision in the rendered text.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
