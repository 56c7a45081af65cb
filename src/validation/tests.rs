use super::{missing_headers, normalize_record, resolve_columns, validate_record, validate_schema};

use anyhow::{anyhow, Result};
use csv::StringRecord;
use rust_decimal::Decimal;

use crate::models::{ErrorField, RawRecord, TransactionStatus, ValidationError};

fn create_record(date: &str, account_number: &str, name: &str, amount: &str) -> RawRecord {
    RawRecord {
        transaction_date: date.to_string(),
        account_number: account_number.to_string(),
        account_holder_name: name.to_string(),
        amount: amount.to_string()
    }
}

fn valid_record() -> RawRecord {
    create_record("2024-03-17", "000-000000000-00", "John Doe", "1000")
}

fn fields(errors: &[ValidationError]) -> Vec<ErrorField> {
    errors.iter().map(|error| error.field).collect()
}

#[test]
fn test_schema_accepts_required_headers_in_any_order_with_extras() {
    assert!(validate_schema(&["Transaction Date", "Account Number", "Account Holder Name", "Amount"]));
    assert!(validate_schema(&["Amount", "Reference", "Account Holder Name", "Transaction Date", "Account Number"]));
}

#[test]
fn test_schema_rejects_any_missing_header() {
    let all = ["Transaction Date", "Account Number", "Account Holder Name", "Amount"];

    for skipped in 0..all.len() {
        let headers: Vec<&str> = all.iter().enumerate()
            .filter(|(index, _)| *index != skipped)
            .map(|(_, header)| *header)
            .collect();

        assert!(!validate_schema(&headers), "{headers:?} should fail");
        assert_eq!(missing_headers(&headers), vec![all[skipped]]);
    }
}

#[test]
fn test_schema_rejects_empty_and_differently_cased_headers() {
    let empty: [&str; 0] = [];

    assert!(!validate_schema(&empty));
    assert_eq!(missing_headers(&empty).len(), 4);
    assert!(!validate_schema(&["transaction date", "account number", "account holder name", "amount"]));
}

#[test]
fn test_resolved_columns_adapt_rows_by_header_position() -> Result<()> {
    let headers = ["Amount", "Memo", "Account Holder Name", "Transaction Date", "Account Number", "Amount"];
    let columns = resolve_columns(&headers).ok_or_else(|| anyhow!("columns should resolve"))?;

    assert_eq!(columns.amount, 0);
    assert_eq!(columns.transaction_date, 3);

    let record = columns.adapt(&StringRecord::from(vec!["1000", "rent", "John Doe", "2024-03-17", "000-000000000-00", "9"]));

    assert_eq!(record, valid_record());

    Ok(())
}

#[test]
fn test_adapting_a_short_row_leaves_missing_cells_empty() -> Result<()> {
    let columns = resolve_columns(&["Transaction Date", "Account Number", "Account Holder Name", "Amount"])
        .ok_or_else(|| anyhow!("columns should resolve"))?;

    let record = columns.adapt(&StringRecord::from(vec!["2024-03-17", "000-000000000-00"]));

    assert_eq!(record, create_record("2024-03-17", "000-000000000-00", "", ""));
    assert_eq!(fields(&validate_record(&record, 1)), vec![ErrorField::AccountHolderName, ErrorField::Amount]);

    Ok(())
}

#[test]
fn test_valid_record_normalizes_into_pending_transaction() -> Result<()> {
    let transaction = normalize_record(&valid_record(), 1).map_err(|errors| anyhow!("{errors:?}"))?;

    assert_eq!(transaction.transaction_date.to_string(), "2024-03-17");
    assert_eq!(transaction.account_number.as_str(), "000-000000000-00");
    assert_eq!(transaction.account_holder_name, "John Doe");
    assert_eq!(transaction.amount.value(), Decimal::from(1000));
    assert_eq!(transaction.status, TransactionStatus::Pending);
    assert!(transaction.error_message.is_none());

    Ok(())
}

#[test]
fn test_holder_name_is_trimmed_on_normalization() -> Result<()> {
    let record = create_record("2024-03-17", "000-000000000-00", "  Jane Doe \t", "0.01");
    let transaction = normalize_record(&record, 1).map_err(|errors| anyhow!("{errors:?}"))?;

    assert_eq!(transaction.account_holder_name, "Jane Doe");

    Ok(())
}

#[test]
fn test_invalid_dates_produce_date_error() {
    for date in ["17-03-2024", "2024/03/17", "", "2024-02-30"] {
        let record = create_record(date, "000-000000000-00", "John Doe", "1000");

        assert_eq!(validate_record(&record, 4), vec![ValidationError::transaction_date(4)], "{date:?}");
    }
}

#[test]
fn test_invalid_account_numbers_produce_account_error() {
    for account_number in ["000-00000000-00", "123-000000000-00", "000-000000000-000", "abc", ""] {
        let record = create_record("2024-03-17", account_number, "John Doe", "1000");

        assert_eq!(fields(&validate_record(&record, 2)), vec![ErrorField::AccountNumber], "{account_number:?}");
    }
}

#[test]
fn test_blank_holder_name_produces_name_error() {
    for name in ["", "   ", "\t"] {
        let record = create_record("2024-03-17", "000-000000000-00", name, "1000");

        assert_eq!(validate_record(&record, 3), vec![ValidationError::account_holder_name(3)]);
    }
}

#[test]
fn test_invalid_amounts_produce_amount_error() {
    for amount in ["0", "-5", "abc", ""] {
        let record = create_record("2024-03-17", "000-000000000-00", "John Doe", amount);
        let errors = validate_record(&record, 1);

        assert_eq!(errors, vec![ValidationError::amount(1)], "{amount:?}");
        assert_eq!(errors[0].message, "Amount must be a positive number");
    }

    for amount in ["1000", "0.01"] {
        let record = create_record("2024-03-17", "000-000000000-00", "John Doe", amount);

        assert!(validate_record(&record, 1).is_empty(), "{amount:?}");
    }
}

#[test]
fn test_every_broken_field_is_reported_for_the_same_row() {
    let record = create_record("2024/03/17", "000-1-00", " ", "-1");
    let errors = validate_record(&record, 7);

    assert_eq!(
        fields(&errors),
        vec![ErrorField::TransactionDate, ErrorField::AccountNumber, ErrorField::AccountHolderName, ErrorField::Amount]
    );
    assert!(errors.iter().all(|error| error.row == 7));
}

#[test]
fn test_revalidating_normalized_source_row_yields_no_errors() -> Result<()> {
    let records = vec![
        valid_record(),
        create_record("2020-02-29", "000-987654321-99", " Ana María ", "12.50"),
        create_record("1999-12-31", "000-111111111-11", "Bob", "1e3"),
    ];

    for (index, record) in records.iter().enumerate() {
        let row = index as u64 + 1;
        let transaction = normalize_record(record, row).map_err(|errors| anyhow!("{errors:?}"))?;
        let source_row = RawRecord::from(&transaction);

        assert!(validate_record(&source_row, row).is_empty());
        assert_eq!(normalize_record(&source_row, row).map_err(|errors| anyhow!("{errors:?}"))?, transaction);
    }

    Ok(())
}
