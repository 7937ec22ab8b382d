//! Permissive CSV reader producing ordered records
//!
//! The first record is the header. Every following record is mapped onto the
//! header columns: short rows get [`FieldValue::Missing`] for the absent
//! columns and long rows collect the surplus cells under the overflow key.
//! An input whose first line is blank has an empty header, so every cell of
//! every row lands under the overflow key.

use crate::document::{Document, FieldValue, Record};
use crate::error::ConversionResult;
use std::io::{BufRead, BufReader, Read};
use tracing::debug;

/// Key used for cells beyond the header width
pub const DEFAULT_OVERFLOW_KEY: &str = "null";

/// Reader options
#[derive(Debug, Clone, PartialEq)]
pub struct CsvReadOptions {
    pub overflow_key: String,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            overflow_key: DEFAULT_OVERFLOW_KEY.to_string(),
        }
    }
}

/// Read a whole CSV input into a document
pub fn read_document<R: Read>(input: R, options: &CsvReadOptions) -> ConversionResult<Document> {
    let mut input = BufReader::new(input);
    let blank_header = starts_with_blank_line(&mut input)?;

    // The csv reader skips blank lines, including a blank first line, so an
    // empty header has to be chosen here.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(!blank_header)
        .flexible(true)
        .from_reader(input);

    let headers = if blank_header {
        csv::StringRecord::new()
    } else {
        reader.headers()?.clone()
    };
    debug!(columns = headers.len(), blank_header, "read CSV header");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(map_row(&headers, &row, &options.overflow_key));
    }

    debug!(rows = records.len(), "read CSV rows");
    Ok(Document::new(records))
}

fn starts_with_blank_line<R: BufRead>(input: &mut R) -> ConversionResult<bool> {
    let buffered = input.fill_buf()?;
    Ok(matches!(buffered.first(), Some(b'\n') | Some(b'\r')))
}

fn map_row(headers: &csv::StringRecord, row: &csv::StringRecord, overflow_key: &str) -> Record {
    let mut record = Record::with_capacity(headers.len() + 1);

    for (index, header) in headers.iter().enumerate() {
        let value = match row.get(index) {
            Some(cell) => FieldValue::Text(cell.to_string()),
            None => FieldValue::Missing,
        };
        record.insert(header, value);
    }

    if row.len() > headers.len() {
        let extra = row.iter().skip(headers.len()).map(str::to_string).collect();
        record.insert(overflow_key, FieldValue::Overflow(extra));
    }

    record
}
