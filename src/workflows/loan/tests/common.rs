use serde_json::{json, Value};

use crate::workflows::loan::domain::RawApplicant;
use crate::workflows::loan::{EligibilityClassifier, EligibilityConfig, LoanApprovalPipeline};

pub(super) const CSV_HEADER: &str =
    "applicant_id,credit_score,annual_income,monthly_debt_payments";

pub(super) fn raw(value: Value) -> RawApplicant {
    match value {
        Value::Object(fields) => RawApplicant::new(fields),
        other => panic!("applicant fixture must be an object, got {other}"),
    }
}

pub(super) fn applicant(id: &str, credit_score: f64, annual_income: f64, debt: f64) -> RawApplicant {
    raw(json!({
        "applicant_id": id,
        "credit_score": credit_score,
        "annual_income": annual_income,
        "monthly_debt_payments": debt,
    }))
}

pub(super) fn classifier() -> EligibilityClassifier {
    EligibilityClassifier::new(EligibilityConfig::default())
}

pub(super) fn pipeline() -> LoanApprovalPipeline {
    LoanApprovalPipeline::new(EligibilityConfig::default())
}

pub(super) fn single_applicant_json(fields: Value) -> String {
    json!({ "applicants": [fields] }).to_string()
}

pub(super) fn sample_batch_json() -> String {
    json!({
        "applicants": [
            { "applicant_id": "A001", "credit_score": 720, "annual_income": 60000, "monthly_debt_payments": 800 },
            { "applicant_id": "A002", "credit_score": 580, "annual_income": 28000, "monthly_debt_payments": 500 },
            { "applicant_id": "A003", "credit_score": 700, "annual_income": 52000, "monthly_debt_payments": 800 },
            { "applicant_id": "A004", "credit_score": 680, "annual_income": 45000, "monthly_debt_payments": 700 },
            { "applicant_id": "A005", "credit_score": 750, "annual_income": 90000, "monthly_debt_payments": 1500 }
        ]
    })
    .to_string()
}
