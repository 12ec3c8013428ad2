use super::{is_card_number, ResultSetName};
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_card_number_requires_exact_length_of_digits() {
    assert!(is_card_number("1111222233334444", 16));
    assert!(!is_card_number("111122223333444", 16));
    assert!(!is_card_number("11112222333344445", 16));
    assert!(!is_card_number("1111-2222-3333-44", 16));
    assert!(!is_card_number("", 16));
    assert!(is_card_number("1234", 4));
}

#[test]
fn test_card_number_rejects_non_ascii_digits() {
    assert!(!is_card_number("١١١١", 4));
    assert!(!is_card_number("12 4", 4));
}

#[test]
fn test_result_set_name_parses_snake_and_route_forms() -> Result<()> {
    assert_eq!(ResultSetName::from_str("chart_of_accounts")?, ResultSetName::ChartOfAccounts);
    assert_eq!(ResultSetName::from_str("Collections-Accounts")?, ResultSetName::CollectionsAccounts);
    assert_eq!(ResultSetName::from_str(" bad_transactions ")?, ResultSetName::BadTransactions);
    assert!(ResultSetName::from_str("good_transactions").is_err());

    Ok(())
}

#[test]
fn test_result_set_name_display_matches_parse_input() -> Result<()> {
    for name in ResultSetName::ALL {
        assert_eq!(ResultSetName::from_str(&name.to_string())?, name);
    }

    Ok(())
}
