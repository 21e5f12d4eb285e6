use serde::{Deserialize, Serialize};

/// Eligibility tier reported for an applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityTier {
    Approved,
    Declined,
    FurtherReview,
}

impl EligibilityTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Approved, Self::Declined, Self::FurtherReview]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Declined => "Declined",
            Self::FurtherReview => "Further Review",
        }
    }
}

/// Outcome of classifying one applicant, with the rationale attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EligibilityDecision {
    Approved { explanation: String },
    Declined(DeclineReason),
    FurtherReview { explanation: String },
}

impl EligibilityDecision {
    pub fn tier(&self) -> EligibilityTier {
        match self {
            EligibilityDecision::Approved { .. } => EligibilityTier::Approved,
            EligibilityDecision::Declined(_) => EligibilityTier::Declined,
            EligibilityDecision::FurtherReview { .. } => EligibilityTier::FurtherReview,
        }
    }

    pub fn label(&self) -> &'static str {
        self.tier().label()
    }

    pub fn explanation(&self) -> String {
        match self {
            EligibilityDecision::Approved { explanation }
            | EligibilityDecision::FurtherReview { explanation } => explanation.clone(),
            EligibilityDecision::Declined(reason) => reason.summary(),
        }
    }
}

/// The single condition named when an applicant is declined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeclineReason {
    LowCreditScore { credit_score: f64, floor: f64 },
    InsufficientIncome { annual_income: f64, floor: f64 },
    ExcessiveDti { dti: f64, maximum: f64 },
}

impl DeclineReason {
    pub fn summary(&self) -> String {
        match self {
            DeclineReason::LowCreditScore { floor, .. } => {
                format!("Declined because credit score is below {floor}")
            }
            DeclineReason::InsufficientIncome { floor, .. } => {
                format!("Declined because annual income is below {floor}")
            }
            DeclineReason::ExcessiveDti { maximum, .. } => {
                format!("Declined because DTI is above {maximum:.2}")
            }
        }
    }
}
