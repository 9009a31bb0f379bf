use std::io::Read;

use crate::error::LibError;

/// Split tab-separated text into rows of fields.
///
/// Quote characters are treated as ordinary text since the sheet export
/// never quotes cells. Rows may have differing lengths; the row parsers
/// decide what is too short.
pub fn parse_tsv<R: Read>(reader: R) -> Result<Vec<Vec<String>>, LibError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Drop the header row, returning only data rows.
pub fn data_rows(mut rows: Vec<Vec<String>>, sheet: &str) -> Result<Vec<Vec<String>>, LibError> {
    if rows.is_empty() {
        return Err(LibError::EmptySheet(sheet.to_string()));
    }
    rows.remove(0);
    Ok(rows)
}
