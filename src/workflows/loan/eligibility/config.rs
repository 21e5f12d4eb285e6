use serde::{Deserialize, Serialize};

/// Thresholds backing the eligibility rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub approval_min_credit_score: f64,
    pub approval_min_annual_income: f64,
    pub approval_max_dti: f64,
    pub decline_credit_score_floor: f64,
    pub decline_annual_income_floor: f64,
    pub decline_max_dti: f64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            approval_min_credit_score: 700.0,
            approval_min_annual_income: 50_000.0,
            approval_max_dti: 0.35,
            decline_credit_score_floor: 600.0,
            decline_annual_income_floor: 30_000.0,
            decline_max_dti: 0.50,
        }
    }
}
