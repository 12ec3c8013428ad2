use crate::models::{BadTransaction, Column, RawRow, RowError, Transaction, TransactionType};
use crate::types::Amount;

/// Turns one record into a typed candidate, or a bad transaction explaining why it could not.
///
/// Blank Account Name and Card Number cells are let through on purpose: the
/// validator owns those checks and reports them with their own reasons.
pub fn parse_row(row: RawRow) -> Result<Transaction, BadTransaction> {
    build(&row).map_err(|error| BadTransaction::from_raw(&row, error))
}

fn build(row: &RawRow) -> Result<Transaction, RowError> {
    for (column, cell) in row.iter() {
        if column.is_required() && cell.is_none() {
            return Err(RowError::MissingField(column));
        }
    }

    let amount = non_blank(row, Column::TransactionAmount)?;
    //NOTE: from_str rounds past 28 significant digits; an amount must be kept exactly or refused
    let amount = Amount::from_str_exact(amount).map_err(|_| RowError::InvalidAmount)?;
    let transaction_type = TransactionType::from(non_blank(row, Column::TransactionType)?);
    let description = non_blank(row, Column::Description)?;

    Ok(Transaction {
        line: row.line,
        account_name: cell(row, Column::AccountName).to_string(),
        card_number: cell(row, Column::CardNumber).to_string(),
        amount,
        transaction_type,
        description: description.to_string(),
        target_card_number: row.get(Column::TargetCardNumber)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}

fn cell(row: &RawRow, column: Column) -> &str {
    row.get(column).unwrap_or_default()
}

fn non_blank(row: &RawRow, column: Column) -> Result<&str, RowError> {
    match row.get(column) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RowError::MissingField(column))
    }
}
