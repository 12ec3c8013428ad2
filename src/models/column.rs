use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::LineNumber;

/// The columns an upload is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    AccountName,
    CardNumber,
    TransactionAmount,
    TransactionType,
    Description,
    TargetCardNumber
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::AccountName,
        Column::CardNumber,
        Column::TransactionAmount,
        Column::TransactionType,
        Column::Description,
        Column::TargetCardNumber
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::AccountName => "Account Name",
            Column::CardNumber => "Card Number",
            Column::TransactionAmount => "Transaction Amount",
            Column::TransactionType => "Transaction Type",
            Column::Description => "Description",
            Column::TargetCardNumber => "Target Card Number"
        }
    }

    /// Target Card Number is only demanded for transfers, and that is the validator's call.
    pub fn is_required(&self) -> bool {
        !matches!(self, Column::TargetCardNumber)
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

impl Display for Column {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.header())
    }
}

/// One CSV record keyed by column, exactly as read.
///
/// A `None` cell means the record was too short to reach that column (or the
/// header does not carry it); an empty string means the cell was present but blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub line: LineNumber,
    cells: [Option<String>; 6]
}

impl RawRow {
    pub fn new(line: LineNumber) -> Self {
        Self {
            line,
            cells: Default::default()
        }
    }

    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.cells[column.slot()] = Some(value.into());
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells[column.slot()].as_deref()
    }

    /// Iterates the columns in header order together with their cells.
    pub fn iter(&self) -> impl Iterator<Item = (Column, Option<&str>)> {
        Column::ALL.into_iter().map(move |column| (column, self.get(column)))
    }
}
