//! Loan applicant intake, validation, and eligibility reporting.
//!
//! A batch moves through the language guard, format validation, record
//! validation, the DTI calculator and the eligibility rule table. Any stage can
//! reject the whole batch; otherwise every applicant is assessed in submission
//! order and the result is rendered as a markdown report.

pub mod calculator;
pub mod domain;
pub mod eligibility;
pub mod feedback;
pub mod format;
pub mod language;
pub mod pipeline;
pub mod report;
pub mod validation;

#[cfg(test)]
mod tests;

pub use calculator::{calculate_dti, DtiResult};
pub use domain::{
    ApplicantField, ApplicantId, ApplicantRecord, InputFormat, RawApplicant, CURRENCY_FIELDS,
    NUMERIC_FIELDS, REQUIRED_FIELDS,
};
pub use eligibility::{
    DeclineReason, EligibilityClassifier, EligibilityConfig, EligibilityDecision, EligibilityTier,
};
pub use feedback::{handle_feedback, FEEDBACK_PROMPT};
pub use format::{parse_applicants, validate_format, FormatError, ParseError, TEMPLATE_MESSAGE};
pub use language::is_non_ascii;
pub use pipeline::{ApplicantAssessment, LoanApprovalPipeline, LoanAssessment, LoanError};
pub use report::views::{ApplicantView, LoanAssessmentView, TierCountEntry};
pub use report::{render_markdown, ValidationSummary};
pub use validation::{coerce_number, validate_records, TypeMismatch, ValidationError};
