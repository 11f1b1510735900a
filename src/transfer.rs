use crate::error::{Result, StoreError};
use crate::models::{Book, BookDraft};
use chrono::NaiveDate;
use serde_json::Value;

/// Pretty JSON array of every record, no envelope.
pub fn export_json(books: &[Book]) -> Result<String> {
    Ok(serde_json::to_string_pretty(books)?)
}

pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.json", prefix, date.format("%Y-%m-%d"))
}

#[derive(Debug, Default)]
pub struct ParsedImport {
    pub drafts: Vec<BookDraft>,
    pub dropped: usize,
}

/// Parse an import blob. Anything but a top-level array is rejected whole;
/// entries that are not objects or lack a title or author are dropped.
pub fn parse_import(blob: &str) -> Result<ParsedImport> {
    let value: Value = serde_json::from_str(blob).map_err(|err| {
        log::warn!("import is not valid JSON: {}", err);
        StoreError::InvalidImportFormat
    })?;
    let Value::Array(entries) = value else {
        return Err(StoreError::InvalidImportFormat);
    };

    let mut parsed = ParsedImport::default();
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            log::warn!("import entry {} is not an object", index);
            parsed.dropped += 1;
            continue;
        }
        match serde_json::from_value::<BookDraft>(entry) {
            Ok(draft) if draft.has_title_and_author() => parsed.drafts.push(draft),
            Ok(_) => {
                log::warn!("import entry {} has no title or author", index);
                parsed.dropped += 1;
            }
            Err(err) => {
                log::warn!("import entry {} could not be read: {}", index, err);
                parsed.dropped += 1;
            }
        }
    }
    Ok(parsed)
}
