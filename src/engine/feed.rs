use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::engine::{InputRecord, Transaction};
use crate::error::LoadError;

/// How many operations are shown.
pub const DISPLAY_LIMIT: usize = 5;

/// Reads the whole document at `path` and splits it into raw records.
///
/// The document must be a JSON array. An element that is not an object is
/// kept as an empty record so the rest of the feed is unaffected.
pub fn load_records(path: &Path) -> Result<Vec<InputRecord>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match serde_json::from_str::<Value>(&text)? {
        Value::Array(items) => items,
        Value::Object(_) => return Err(LoadError::NotAnArray("an object")),
        Value::String(_) => return Err(LoadError::NotAnArray("a string")),
        Value::Number(_) => return Err(LoadError::NotAnArray("a number")),
        Value::Bool(_) => return Err(LoadError::NotAnArray("a boolean")),
        Value::Null => return Err(LoadError::NotAnArray("null")),
    };

    log::debug!("Started deserialising {} records", items.len());
    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match serde_json::from_value::<InputRecord>(item) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Record #{index} is not an object, using empty fields: {e}");
                InputRecord::default()
            }
        })
        .collect();

    Ok(records)
}

/// The operations of one document, in display order once sorted.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    transactions: Vec<Transaction>,
}

impl Feed {
    /// Builds one transaction per record, keeping the source order.
    pub fn from_records(records: &[InputRecord]) -> Self {
        let transactions = records
            .iter()
            .map(|record| {
                let tx = record.to_transaction();
                log::debug!("Converted record into {tx:?}");
                tx
            })
            .collect();

        Feed { transactions }
    }

    /// Stable sort on the `DD.MM.YYYY` text, newest first.
    ///
    /// The comparison is lexicographic on the formatted date, so the day
    /// dominates the ordering rather than the year.
    pub fn sort_by_date_desc(&mut self) {
        self.transactions.sort_by(|a, b| b.date().cmp(a.date()));
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn latest(&self, limit: usize) -> &[Transaction] {
        &self.transactions[..limit.min(self.transactions.len())]
    }

    pub fn write_latest<W: Write>(&self, out: &mut W, limit: usize) -> io::Result<()> {
        for tx in self.latest(limit) {
            log::debug!("Writing transaction id={}", tx.id());
            tx.write_to(out)?;
        }
        Ok(())
    }
}
