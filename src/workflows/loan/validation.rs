use super::domain::{
    ApplicantField, ApplicantId, ApplicantRecord, RawApplicant, CURRENCY_FIELDS, NUMERIC_FIELDS,
    REQUIRED_FIELDS,
};
use serde_json::Value;
use tracing::{debug, warn};

const NON_USD_SYMBOLS: [char; 3] = ['€', '£', '¥'];

/// Batch-aborting problems found in an individual applicant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field(s): {}.", join_fields(.0))]
    MissingFields(Vec<ApplicantField>),
    #[error("Invalid data type for field(s): {}. Please ensure numeric values.", join_fields(.0))]
    InvalidTypes(Vec<ApplicantField>),
    #[error("Invalid value for field(s): {}. Please correct and resubmit.", join_fields(.0))]
    InvalidValues(Vec<ApplicantField>),
    #[error("Unsupported currency detected. Please use USD.")]
    UnsupportedCurrency { field: ApplicantField },
}

fn join_fields(fields: &[ApplicantField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raised when a value cannot be read as a number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("expected a numeric value, found {found}")]
pub struct TypeMismatch {
    pub found: String,
}

/// Coerce a JSON number or numeric string to `f64`.
///
/// Strings are trimmed and may carry one leading non-USD currency symbol, so
/// the currency screen can still see values such as `"€50000"`. Dollar-prefixed
/// strings, booleans, nulls, containers and non-finite results are rejected.
pub fn coerce_number(value: &Value) -> Result<f64, TypeMismatch> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            let digits = trimmed
                .strip_prefix(NON_USD_SYMBOLS)
                .unwrap_or(trimmed)
                .trim_start();
            digits.parse::<f64>().ok()
        }
        _ => None,
    };

    parsed
        .filter(|number| number.is_finite())
        .ok_or_else(|| TypeMismatch {
            found: value.to_string(),
        })
}

/// Check every applicant in order and stop at the first one that fails.
///
/// A single bad record rejects the whole submission; nothing is returned for
/// the records that passed before it.
pub fn validate_records(records: &[RawApplicant]) -> Result<Vec<ApplicantRecord>, ValidationError> {
    let mut validated = Vec::with_capacity(records.len());

    for (index, raw) in records.iter().enumerate() {
        match validate_record(raw) {
            Ok(record) => validated.push(record),
            Err(error) => {
                warn!(
                    position = index + 1,
                    applicant = ?raw.get(ApplicantField::ApplicantId),
                    %error,
                    "applicant batch rejected"
                );
                return Err(error);
            }
        }
    }

    debug!(count = validated.len(), "applicant batch validated");
    Ok(validated)
}

fn validate_record(raw: &RawApplicant) -> Result<ApplicantRecord, ValidationError> {
    let missing: Vec<ApplicantField> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !raw.contains(*field))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let mut numbers = [0.0_f64; NUMERIC_FIELDS.len()];
    let mut invalid_types = Vec::new();
    for (slot, field) in numbers.iter_mut().zip(NUMERIC_FIELDS) {
        match raw.get(field).map(coerce_number) {
            Some(Ok(number)) => *slot = number,
            Some(Err(mismatch)) => {
                debug!(field = field.key(), found = %mismatch.found, "non-numeric value");
                invalid_types.push(field);
            }
            None => invalid_types.push(field),
        }
    }
    if !invalid_types.is_empty() {
        return Err(ValidationError::InvalidTypes(invalid_types));
    }

    let [credit_score, annual_income, monthly_debt_payments] = numbers;

    let mut invalid_values = Vec::new();
    if credit_score <= 0.0 {
        invalid_values.push(ApplicantField::CreditScore);
    }
    if annual_income <= 0.0 {
        invalid_values.push(ApplicantField::AnnualIncome);
    }
    if monthly_debt_payments < 0.0 {
        invalid_values.push(ApplicantField::MonthlyDebtPayments);
    }
    if !invalid_values.is_empty() {
        return Err(ValidationError::InvalidValues(invalid_values));
    }

    for field in CURRENCY_FIELDS {
        if let Some(Value::String(text)) = raw.get(field) {
            if text.contains(NON_USD_SYMBOLS) {
                return Err(ValidationError::UnsupportedCurrency { field });
            }
        }
    }

    Ok(ApplicantRecord {
        applicant_id: applicant_id(raw),
        credit_score,
        annual_income,
        monthly_debt_payments,
    })
}

fn applicant_id(raw: &RawApplicant) -> ApplicantId {
    match raw.get(ApplicantField::ApplicantId) {
        Some(Value::String(id)) => ApplicantId(id.clone()),
        Some(other) => ApplicantId(other.to_string()),
        None => ApplicantId(String::new()),
    }
}
