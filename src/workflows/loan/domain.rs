use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Identifier wrapper for submitted applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields every submitted applicant must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantField {
    ApplicantId,
    CreditScore,
    AnnualIncome,
    MonthlyDebtPayments,
}

impl ApplicantField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::ApplicantId => "applicant_id",
            Self::CreditScore => "credit_score",
            Self::AnnualIncome => "annual_income",
            Self::MonthlyDebtPayments => "monthly_debt_payments",
        }
    }
}

impl fmt::Display for ApplicantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub const REQUIRED_FIELDS: [ApplicantField; 4] = [
    ApplicantField::ApplicantId,
    ApplicantField::CreditScore,
    ApplicantField::AnnualIncome,
    ApplicantField::MonthlyDebtPayments,
];

pub const NUMERIC_FIELDS: [ApplicantField; 3] = [
    ApplicantField::CreditScore,
    ApplicantField::AnnualIncome,
    ApplicantField::MonthlyDebtPayments,
];

/// Fields denominated in dollars; textual values are screened for foreign symbols.
pub const CURRENCY_FIELDS: [ApplicantField; 2] =
    [ApplicantField::AnnualIncome, ApplicantField::MonthlyDebtPayments];

/// Accepted input encodings for an applicant batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else if value.eq_ignore_ascii_case("csv") {
            Ok(Self::Csv)
        } else {
            Err(value.to_string())
        }
    }
}

/// A submitted applicant exactly as it arrived, before any field checks.
///
/// JSON input keeps its native values. CSV cells are carried as strings and a
/// cell missing from a short row is recorded as `Value::Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawApplicant {
    fields: Map<String, Value>,
}

impl RawApplicant {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: ApplicantField) -> Option<&Value> {
        self.fields.get(field.key())
    }

    pub fn contains(&self, field: ApplicantField) -> bool {
        self.fields.contains_key(field.key())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn remove(&mut self, field: ApplicantField) -> Option<Value> {
        self.fields.remove(field.key())
    }
}

impl From<Map<String, Value>> for RawApplicant {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Validated applicant with numeric fields coerced. Only the record validator
/// builds these, so the positivity invariants always hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub applicant_id: ApplicantId,
    pub credit_score: f64,
    pub annual_income: f64,
    pub monthly_debt_payments: f64,
}
