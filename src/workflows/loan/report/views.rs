use super::super::eligibility::EligibilityTier;
use super::super::pipeline::{ApplicantAssessment, LoanAssessment};
use super::validation::ValidationSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApplicantView {
    pub applicant_id: String,
    pub credit_score: f64,
    pub annual_income: f64,
    pub monthly_debt_payments: f64,
    pub monthly_income: f64,
    pub dti: f64,
    pub status: EligibilityTier,
    pub status_label: &'static str,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierCountEntry {
    pub status: EligibilityTier,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoanAssessmentView {
    pub evaluated_at: DateTime<Utc>,
    pub applicant_count: usize,
    pub validation: ValidationSummary,
    pub tier_counts: Vec<TierCountEntry>,
    pub applicants: Vec<ApplicantView>,
}

impl ApplicantAssessment {
    pub fn to_view(&self) -> ApplicantView {
        let tier = self.decision.tier();
        ApplicantView {
            applicant_id: self.record.applicant_id.0.clone(),
            credit_score: self.record.credit_score,
            annual_income: self.record.annual_income,
            monthly_debt_payments: self.record.monthly_debt_payments,
            monthly_income: self.dti.monthly_income,
            dti: self.dti.dti,
            status: tier,
            status_label: tier.label(),
            explanation: self.decision.explanation(),
        }
    }
}

impl LoanAssessment {
    pub fn view(&self) -> LoanAssessmentView {
        let tier_counts = EligibilityTier::ordered()
            .into_iter()
            .map(|status| TierCountEntry {
                status,
                status_label: status.label(),
                count: self.count_for(status),
            })
            .collect();

        LoanAssessmentView {
            evaluated_at: self.evaluated_at,
            applicant_count: self.applicants.len(),
            validation: self.validation.clone(),
            tier_counts,
            applicants: self
                .applicants
                .iter()
                .map(ApplicantAssessment::to_view)
                .collect(),
        }
    }
}
