use super::{AccountTotal, BadTransaction, Column, RawRow, RowError, Transaction, TransactionType};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

fn create_transaction(transaction_type: TransactionType, amount: &str) -> Result<Transaction> {
    Ok(Transaction {
        line: 7,
        account_name: "Alice".to_string(),
        card_number: "1111222233334444".to_string(),
        amount: Decimal::from_str(amount)?,
        transaction_type,
        description: "pay".to_string(),
        target_card_number: None
    })
}

#[test]
fn test_transaction_type_parses_case_insensitively() {
    assert_eq!(TransactionType::from("Credit"), TransactionType::Credit);
    assert_eq!(TransactionType::from("debit"), TransactionType::Debit);
    assert_eq!(TransactionType::from(" TRANSFER "), TransactionType::Transfer);
    assert_eq!(TransactionType::from("refund"), TransactionType::Unrecognized("refund".to_string()));
}

#[test]
fn test_unrecognized_transaction_type_keeps_raw_text() {
    let transaction_type = TransactionType::from("Refund");

    assert!(!transaction_type.is_recognized());
    assert_eq!(transaction_type.to_string(), "Refund");
    assert_eq!(TransactionType::Debit.to_string(), "Debit");
}

#[test]
fn test_account_total_accumulates_signed_amounts_exactly() -> Result<()> {
    let mut account = AccountTotal::new("Alice", "1111222233334444");

    account.apply(Decimal::from_str("100.00")?)?;
    account.apply(Decimal::from_str("-20.00")?)?;
    account.apply(Decimal::from_str("0.10")?)?;
    account.apply(Decimal::from_str("0.20")?)?;

    assert_eq!(account.total_amount.to_string(), "80.30");
    assert!(!account.is_negative());

    Ok(())
}

#[test]
fn test_account_total_overflow_leaves_total_untouched() -> Result<()> {
    let mut account = AccountTotal::new("Alice", "1111222233334444");
    account.apply(Decimal::MAX)?;

    let result = account.apply(Decimal::ONE);

    assert!(matches!(result, Err(RowError::Overflow)));
    assert_eq!(account.total_amount, Decimal::MAX);

    Ok(())
}

#[test]
fn test_account_total_reports_negative_balance() -> Result<()> {
    let mut account = AccountTotal::new("Bob", "5555666677778888");
    account.apply(Decimal::from_str("-0.01")?)?;

    assert!(account.is_negative());
    assert!(!AccountTotal::new("Carol", "1").is_negative());

    Ok(())
}

#[test]
fn test_row_error_messages_are_operator_reasons() {
    assert_eq!(RowError::MissingField(Column::Description).to_string(), "missing required field: Description");
    assert_eq!(RowError::InvalidAmount.to_string(), "invalid amount format");
    assert_eq!(RowError::InvalidCardNumber.to_string(), "invalid card number format");
    assert_eq!(RowError::ZeroAmount.to_string(), "zero amount transaction");
    assert_eq!(RowError::InvalidTransferTarget.to_string(), "missing/invalid target card for transfer");
    assert_eq!(RowError::UnrecognizedType.to_string(), "unrecognized transaction type");
}

#[test]
fn test_raw_row_distinguishes_absent_from_blank_cells() {
    let row = RawRow::new(3)
        .with(Column::AccountName, "Alice")
        .with(Column::CardNumber, "");

    assert_eq!(row.get(Column::AccountName), Some("Alice"));
    assert_eq!(row.get(Column::CardNumber), Some(""));
    assert_eq!(row.get(Column::Description), None);
    assert_eq!(row.iter().filter(|(_, cell)| cell.is_some()).count(), 2);
}

#[test]
fn test_bad_transaction_from_raw_keeps_partial_cells() {
    let row = RawRow::new(4)
        .with(Column::AccountName, "Bob")
        .with(Column::TransactionAmount, "12,50")
        .with(Column::TargetCardNumber, "");

    let bad = BadTransaction::from_raw(&row, RowError::InvalidAmount);

    assert_eq!(bad.line, 4);
    assert_eq!(bad.account_name, "Bob");
    assert_eq!(bad.card_number, "");
    assert_eq!(bad.transaction_amount, "12,50");
    assert_eq!(bad.target_card_number, None);
    assert_eq!(bad.reason, "invalid amount format");
}

#[test]
fn test_bad_transaction_serializes_with_display_column_names() -> Result<()> {
    let transaction = create_transaction(TransactionType::Transfer, "-5.00")?;
    let bad = BadTransaction::from_transaction(&transaction, RowError::InvalidTransferTarget);

    let json = serde_json::to_value(&bad)?;

    assert_eq!(json["Account Name"], "Alice");
    assert_eq!(json["Card Number"], "1111222233334444");
    assert_eq!(json["Transaction Amount"], "-5.00");
    assert_eq!(json["Transaction Type"], "Transfer");
    assert_eq!(json["Description"], "pay");
    assert!(json["Target Card Number"].is_null());
    assert_eq!(json["Reason"], "missing/invalid target card for transfer");
    assert!(json.get("line").is_none());

    Ok(())
}

#[test]
fn test_account_total_serializes_with_display_column_names() -> Result<()> {
    let mut account = AccountTotal::new("Alice", "1111222233334444");
    account.apply(Decimal::from_str("80.00")?)?;

    let json = serde_json::to_value(&account)?;

    assert_eq!(json["Account Name"], "Alice");
    assert_eq!(json["Card Number"], "1111222233334444");
    assert_eq!(json["Total Amount"], "80.00");

    Ok(())
}
