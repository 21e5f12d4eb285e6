use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::calculator::{calculate_dti, DtiResult};
use super::domain::ApplicantRecord;
use super::eligibility::{
    EligibilityClassifier, EligibilityConfig, EligibilityDecision, EligibilityTier,
};
use super::format::{parse_applicants, validate_format, FormatError, ParseError};
use super::language::is_non_ascii;
use super::report::{render_markdown, ValidationSummary};
use super::validation::{validate_records, ValidationError};

/// Terminal failure for a submitted batch. No partial results survive one.
#[derive(Debug, thiserror::Error)]
pub enum LoanError {
    #[error("Unsupported language detected. Please use ENGLISH.")]
    UnsupportedLanguage,
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl From<ParseError> for LoanError {
    fn from(value: ParseError) -> Self {
        Self::Unexpected(value.to_string())
    }
}

impl LoanError {
    pub const fn stage(&self) -> &'static str {
        match self {
            LoanError::UnsupportedLanguage => "language",
            LoanError::Format(_) => "format",
            LoanError::Validation(_) => "validation",
            LoanError::Unexpected(_) => "unexpected",
        }
    }
}

/// Per-applicant evaluation: the validated inputs, the DTI figures, and the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantAssessment {
    pub record: ApplicantRecord,
    pub dti: DtiResult,
    pub decision: EligibilityDecision,
}

/// Evaluation output for a whole batch, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanAssessment {
    pub evaluated_at: DateTime<Utc>,
    pub validation: ValidationSummary,
    pub applicants: Vec<ApplicantAssessment>,
}

impl LoanAssessment {
    pub fn count_for(&self, tier: EligibilityTier) -> usize {
        self.applicants
            .iter()
            .filter(|assessment| assessment.decision.tier() == tier)
            .count()
    }
}

/// Orchestrates the language guard, format and record validation, the DTI
/// calculator, and the eligibility classifier.
#[derive(Debug, Clone, Default)]
pub struct LoanApprovalPipeline {
    classifier: EligibilityClassifier,
}

impl LoanApprovalPipeline {
    pub fn new(config: EligibilityConfig) -> Self {
        Self {
            classifier: EligibilityClassifier::new(config),
        }
    }

    pub fn classifier(&self) -> &EligibilityClassifier {
        &self.classifier
    }

    /// Run the batch and render the markdown report, or the error text when
    /// any stage rejects it. Never fails.
    pub fn process_input(&self, raw: &str, format_kind: &str) -> String {
        match self.evaluate(raw, format_kind) {
            Ok(assessment) => render_markdown(&assessment),
            Err(error) => format!("ERROR: {error}"),
        }
    }

    /// Run every stage in order, stopping at the first one that rejects the batch.
    pub fn evaluate(&self, raw: &str, format_kind: &str) -> Result<LoanAssessment, LoanError> {
        let result = self.run_stages(raw, format_kind);
        match &result {
            Ok(assessment) => info!(
                applicants = assessment.applicants.len(),
                approved = assessment.count_for(EligibilityTier::Approved),
                declined = assessment.count_for(EligibilityTier::Declined),
                further_review = assessment.count_for(EligibilityTier::FurtherReview),
                "loan batch evaluated"
            ),
            Err(LoanError::Format(error)) => {
                let detail = error.detail().unwrap_or_default();
                warn!(stage = "format", %error, %detail, "loan batch rejected");
            }
            Err(error) => warn!(stage = error.stage(), %error, "loan batch rejected"),
        }
        result
    }

    fn run_stages(&self, raw: &str, format_kind: &str) -> Result<LoanAssessment, LoanError> {
        if is_non_ascii(raw) {
            return Err(LoanError::UnsupportedLanguage);
        }

        let format = validate_format(raw, format_kind)?;
        debug!(format = format.label(), "input format accepted");

        let raw_applicants = parse_applicants(raw, format)?;
        let records = validate_records(&raw_applicants)?;
        let validation = ValidationSummary::from_applicants(&raw_applicants);

        let applicants = records
            .into_iter()
            .map(|record| self.assess(record))
            .collect();

        Ok(LoanAssessment {
            evaluated_at: Utc::now(),
            validation,
            applicants,
        })
    }

    fn assess(&self, record: ApplicantRecord) -> ApplicantAssessment {
        let dti = calculate_dti(record.annual_income, record.monthly_debt_payments);
        let decision =
            self.classifier
                .classify(record.credit_score, record.annual_income, dti.dti);
        debug!(
            applicant = %record.applicant_id,
            dti = dti.dti,
            status = decision.label(),
            "applicant classified"
        );

        ApplicantAssessment {
            record,
            dti,
            decision,
        }
    }
}
