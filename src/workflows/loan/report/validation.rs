use super::super::domain::{ApplicantField, RawApplicant, NUMERIC_FIELDS, REQUIRED_FIELDS};
use super::super::validation::coerce_number;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPresence {
    pub field: ApplicantField,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericRuleCheck {
    pub field: ApplicantField,
    pub valid: bool,
}

impl NumericRuleCheck {
    pub fn label(&self) -> &'static str {
        match self.field {
            ApplicantField::CreditScore => "Credit Score (positive number)",
            ApplicantField::AnnualIncome => "Annual Income (positive number)",
            ApplicantField::MonthlyDebtPayments => "Monthly Debt Payments (non-negative number)",
            ApplicantField::ApplicantId => "Applicant ID",
        }
    }
}

/// Batch-wide checklist shown at the top of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub application_count: usize,
    pub field_count: usize,
    pub required_fields: Vec<FieldPresence>,
    pub numeric_rules: Vec<NumericRuleCheck>,
}

impl ValidationSummary {
    pub fn from_applicants(applicants: &[RawApplicant]) -> Self {
        let required_fields = REQUIRED_FIELDS
            .into_iter()
            .map(|field| FieldPresence {
                field,
                present: applicants.iter().all(|applicant| applicant.contains(field)),
            })
            .collect();

        let numeric_rules = NUMERIC_FIELDS
            .into_iter()
            .map(|field| NumericRuleCheck {
                field,
                valid: applicants
                    .iter()
                    .all(|applicant| numeric_rule_holds(applicant, field)),
            })
            .collect();

        Self {
            application_count: applicants.len(),
            field_count: REQUIRED_FIELDS.len(),
            required_fields,
            numeric_rules,
        }
    }

    pub fn all_valid(&self) -> bool {
        self.numeric_rules.iter().all(|rule| rule.valid)
    }
}

fn numeric_rule_holds(applicant: &RawApplicant, field: ApplicantField) -> bool {
    let Some(value) = applicant.get(field).and_then(|raw| coerce_number(raw).ok()) else {
        return false;
    };

    match field {
        ApplicantField::MonthlyDebtPayments => value >= 0.0,
        _ => value > 0.0,
    }
}
