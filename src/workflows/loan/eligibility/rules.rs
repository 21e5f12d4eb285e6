use super::config::EligibilityConfig;
use super::policy::{DeclineReason, EligibilityDecision};

pub(crate) struct ClassificationSignals {
    pub credit_score: f64,
    pub annual_income: f64,
    pub dti: f64,
}

/// One row of the decision table: when it applies and what it decides.
pub(crate) struct EligibilityRule {
    pub name: &'static str,
    pub applies: fn(&ClassificationSignals, &EligibilityConfig) -> bool,
    pub decide: fn(&ClassificationSignals, &EligibilityConfig) -> EligibilityDecision,
}

/// Checked top to bottom; the first rule that applies wins. The three decline
/// rows keep the credit, income, DTI order so only the first failing condition
/// is named.
pub(crate) const RULES: &[EligibilityRule] = &[
    EligibilityRule {
        name: "approve_strong_profile",
        applies: strong_profile,
        decide: approve,
    },
    EligibilityRule {
        name: "decline_low_credit_score",
        applies: low_credit_score,
        decide: decline_low_credit_score,
    },
    EligibilityRule {
        name: "decline_insufficient_income",
        applies: insufficient_income,
        decide: decline_insufficient_income,
    },
    EligibilityRule {
        name: "decline_excessive_dti",
        applies: excessive_dti,
        decide: decline_excessive_dti,
    },
];

pub(crate) fn further_review() -> EligibilityDecision {
    EligibilityDecision::FurtherReview {
        explanation: "Application requires further review due to borderline values".to_string(),
    }
}

fn strong_profile(signals: &ClassificationSignals, config: &EligibilityConfig) -> bool {
    signals.credit_score >= config.approval_min_credit_score
        && signals.annual_income >= config.approval_min_annual_income
        && signals.dti < config.approval_max_dti
}

fn approve(signals: &ClassificationSignals, config: &EligibilityConfig) -> EligibilityDecision {
    EligibilityDecision::Approved {
        explanation: format!(
            "Approved because credit score {} is above {}, annual income {} is above {}, and DTI {} is below {:.2}",
            signals.credit_score,
            config.approval_min_credit_score,
            signals.annual_income,
            config.approval_min_annual_income,
            signals.dti,
            config.approval_max_dti
        ),
    }
}

fn low_credit_score(signals: &ClassificationSignals, config: &EligibilityConfig) -> bool {
    signals.credit_score < config.decline_credit_score_floor
}

fn decline_low_credit_score(
    signals: &ClassificationSignals,
    config: &EligibilityConfig,
) -> EligibilityDecision {
    EligibilityDecision::Declined(DeclineReason::LowCreditScore {
        credit_score: signals.credit_score,
        floor: config.decline_credit_score_floor,
    })
}

fn insufficient_income(signals: &ClassificationSignals, config: &EligibilityConfig) -> bool {
    signals.annual_income < config.decline_annual_income_floor
}

fn decline_insufficient_income(
    signals: &ClassificationSignals,
    config: &EligibilityConfig,
) -> EligibilityDecision {
    EligibilityDecision::Declined(DeclineReason::InsufficientIncome {
        annual_income: signals.annual_income,
        floor: config.decline_annual_income_floor,
    })
}

fn excessive_dti(signals: &ClassificationSignals, config: &EligibilityConfig) -> bool {
    signals.dti > config.decline_max_dti
}

fn decline_excessive_dti(
    signals: &ClassificationSignals,
    config: &EligibilityConfig,
) -> EligibilityDecision {
    EligibilityDecision::Declined(DeclineReason::ExcessiveDti {
        dti: signals.dti,
        maximum: config.decline_max_dti,
    })
}
