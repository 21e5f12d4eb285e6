use serde_json::json;

use super::common::*;
use crate::workflows::loan::domain::{ApplicantField, ApplicantId};
use crate::workflows::loan::{validate_records, ValidationError};

#[test]
fn missing_income_is_named_exactly() {
    let mut record = applicant("A001", 720.0, 60_000.0, 800.0);
    record.remove(ApplicantField::AnnualIncome);

    let error = validate_records(&[record]).expect_err("income missing");

    assert_eq!(
        error,
        ValidationError::MissingFields(vec![ApplicantField::AnnualIncome])
    );
    assert_eq!(
        error.to_string(),
        "Missing required field(s): annual_income."
    );
}

#[test]
fn missing_fields_are_listed_in_declaration_order() {
    let record = raw(json!({ "credit_score": 720 }));

    match validate_records(&[record]) {
        Err(ValidationError::MissingFields(fields)) => assert_eq!(
            fields,
            vec![
                ApplicantField::ApplicantId,
                ApplicantField::AnnualIncome,
                ApplicantField::MonthlyDebtPayments,
            ]
        ),
        other => panic!("expected missing fields, got {other:?}"),
    }
}

#[test]
fn type_errors_are_collected_per_record() {
    let record = raw(json!({
        "applicant_id": "A001",
        "credit_score": "excellent",
        "annual_income": 60000,
        "monthly_debt_payments": null,
    }));

    let error = validate_records(&[record]).expect_err("types invalid");

    assert_eq!(
        error.to_string(),
        "Invalid data type for field(s): credit_score, monthly_debt_payments. Please ensure numeric values."
    );
}

#[test]
fn type_check_runs_before_range_check() {
    let record = raw(json!({
        "applicant_id": "A001",
        "credit_score": "n/a",
        "annual_income": -5,
        "monthly_debt_payments": 0,
    }));

    match validate_records(&[record]) {
        Err(ValidationError::InvalidTypes(fields)) => {
            assert_eq!(fields, vec![ApplicantField::CreditScore])
        }
        other => panic!("expected type error, got {other:?}"),
    }
}

#[test]
fn range_errors_are_collected_per_record() {
    let record = applicant("A001", 0.0, -1.0, -0.01);

    let error = validate_records(&[record]).expect_err("values invalid");

    assert_eq!(
        error,
        ValidationError::InvalidValues(vec![
            ApplicantField::CreditScore,
            ApplicantField::AnnualIncome,
            ApplicantField::MonthlyDebtPayments,
        ])
    );
    assert!(error
        .to_string()
        .ends_with("Please correct and resubmit."));
}

#[test]
fn zero_debt_is_allowed() {
    let records = validate_records(&[applicant("A001", 640.0, 41_000.0, 0.0)]).expect("valid");
    assert_eq!(records[0].monthly_debt_payments, 0.0);
}

#[test]
fn foreign_currency_in_text_is_rejected() {
    let record = raw(json!({
        "applicant_id": "A001",
        "credit_score": 720,
        "annual_income": "€50000",
        "monthly_debt_payments": 800,
    }));

    let error = validate_records(&[record]).expect_err("euro income");

    assert_eq!(
        error,
        ValidationError::UnsupportedCurrency {
            field: ApplicantField::AnnualIncome
        }
    );
    assert_eq!(
        error.to_string(),
        "Unsupported currency detected. Please use USD."
    );
}

#[test]
fn foreign_currency_on_debt_is_rejected() {
    let record = raw(json!({
        "applicant_id": "A001",
        "credit_score": 720,
        "annual_income": 50000,
        "monthly_debt_payments": "£800",
    }));

    assert!(matches!(
        validate_records(&[record]),
        Err(ValidationError::UnsupportedCurrency {
            field: ApplicantField::MonthlyDebtPayments
        })
    ));
}

#[test]
fn numeric_strings_are_accepted() {
    let record = raw(json!({
        "applicant_id": 101,
        "credit_score": "715",
        "annual_income": "64000",
        "monthly_debt_payments": " 950.50 ",
    }));

    let records = validate_records(&[record]).expect("valid");

    assert_eq!(records[0].applicant_id, ApplicantId("101".to_string()));
    assert_eq!(records[0].credit_score, 715.0);
    assert_eq!(records[0].annual_income, 64_000.0);
    assert_eq!(records[0].monthly_debt_payments, 950.5);
}

#[test]
fn dollar_prefixed_amounts_are_type_errors() {
    let record = raw(json!({
        "applicant_id": "P1",
        "credit_score": 720,
        "annual_income": "$60000",
        "monthly_debt_payments": "$800",
    }));

    match validate_records(&[record]) {
        Err(ValidationError::InvalidTypes(fields)) => assert_eq!(
            fields,
            vec![
                ApplicantField::AnnualIncome,
                ApplicantField::MonthlyDebtPayments
            ]
        ),
        other => panic!("expected invalid type error, got {other:?}"),
    }
}

#[test]
fn first_failing_record_rejects_the_whole_batch() {
    let mut missing = applicant("A003", 700.0, 52_000.0, 800.0);
    missing.remove(ApplicantField::CreditScore);
    let batch = [
        applicant("A001", 720.0, 60_000.0, 800.0),
        applicant("A002", 580.0, 0.0, 500.0),
        missing,
    ];

    match validate_records(&batch) {
        Err(ValidationError::InvalidValues(fields)) => {
            assert_eq!(fields, vec![ApplicantField::AnnualIncome])
        }
        other => panic!("expected the second record's range error, got {other:?}"),
    }
}

#[test]
fn validation_is_idempotent() {
    let batch = [
        applicant("A001", 720.0, 60_000.0, 800.0),
        applicant("A002", 580.0, 28_000.0, 500.0),
    ];

    let first = validate_records(&batch).expect("valid");
    let second = validate_records(&batch).expect("valid");
    assert_eq!(first, second);

    let broken = [raw(json!({ "applicant_id": "A9" }))];
    assert_eq!(
        validate_records(&broken).expect_err("invalid"),
        validate_records(&broken).expect_err("invalid")
    );
}

#[test]
fn empty_batch_is_valid() {
    assert!(validate_records(&[]).expect("empty batch").is_empty());
}
