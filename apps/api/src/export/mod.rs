//! CSV export of generated test cases.
//!
//! Header row is `id,type,case,expected`; every data field is quoted.

pub mod handlers;

use anyhow::Context;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::Value;

use crate::errors::AppError;

pub const CSV_HEADER: &str = "id,type,case,expected";
const COLUMNS: [&str; 4] = ["id", "type", "case", "expected"];

/// Renders records as CSV.
///
/// A missing or null field renders empty and non-string values render as
/// their JSON text, so degraded records without `case` still export.
pub fn records_to_csv(records: &[Value]) -> Result<String, AppError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        writer.write_record(COLUMNS.iter().map(|column| field_text(record, column)))?;
    }

    let rows = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {e}"))?;
    let rows = String::from_utf8(rows).context("CSV output is not valid UTF-8")?;

    Ok(format!("{CSV_HEADER}\n{rows}"))
}

fn field_text(record: &Value, column: &str) -> String {
    match record.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
