use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::ingest::errors::StructuralError;
use crate::ingest::header::ColumnIndex;
use crate::models::RawRow;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Rejects file names that do not carry a `.csv` extension.
pub fn ensure_csv_file_name(file_name: &str) -> Result<(), StructuralError> {
    let is_csv = file_name.rsplit_once('.')
        .is_some_and(|(stem, extension)| !stem.is_empty() && extension.eq_ignore_ascii_case("csv"));

    if is_csv {
        Ok(())
    } else {
        Err(StructuralError::InvalidFileType(file_name.to_string()))
    }
}

/// Performs every structural check on an upload and returns its records in file order.
///
/// Any failure here rejects the whole upload: the caller never sees a partial row list.
pub fn read_rows(bytes: &[u8], max_bytes: usize) -> Result<Vec<RawRow>, StructuralError> {
    if bytes.len() > max_bytes {
        return Err(StructuralError::TooLarge { size: bytes.len(), limit: max_bytes });
    }

    let text = std::str::from_utf8(bytes).map_err(|_| StructuralError::NotUtf8)?;
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    if text.trim().is_empty() {
        return Err(StructuralError::Empty);
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let index = ColumnIndex::from_headers(reader.headers()?)?;
    let mut rows = Vec::new();

    for (offset, result) in reader.records().enumerate() {
        let record = result?;
        //NOTE: The header occupies line 1, so the fallback assumes one line per record
        let line = record.position()
            .map(|position| position.line())
            .unwrap_or(offset as u64 + 2);

        rows.push(index.extract(&record, line));
    }

    debug!("Read {} record(s) from upload", rows.len());

    Ok(rows)
}
