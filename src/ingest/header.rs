use csv::StringRecord;

use crate::ingest::errors::StructuralError;
use crate::models::{Column, RawRow};
use crate::types::LineNumber;

/// Maps each known column to its position in the uploaded header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: Vec<(Column, usize)>
}

impl ColumnIndex {
    /// Matches header cells to columns ignoring case and surrounding whitespace.
    /// Unknown header cells are ignored; the first occurrence of a duplicate wins.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, StructuralError> {
        let mut positions = Vec::with_capacity(Column::ALL.len());

        for column in Column::ALL {
            let position = headers.iter()
                .position(|header| header.trim().eq_ignore_ascii_case(column.header()));

            if let Some(position) = position {
                positions.push((column, position));
            }
        }

        let missing: Vec<String> = Column::ALL.iter()
            .filter(|column| column.is_required())
            .filter(|column| !positions.iter().any(|(found, _)| found == *column))
            .map(|column| column.header().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(StructuralError::MissingColumns(missing));
        }

        Ok(Self { positions })
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions.iter()
            .find(|(found, _)| *found == column)
            .map(|(_, position)| *position)
    }

    /// Lifts a record into a `RawRow`. Cells past the end of a short record stay absent.
    pub fn extract(&self, record: &StringRecord, line: LineNumber) -> RawRow {
        let mut row = RawRow::new(line);

        for (column, position) in &self.positions {
            if let Some(value) = record.get(*position) {
                row.set(*column, value);
            }
        }

        row
    }
}
