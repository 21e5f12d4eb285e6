mod config;
mod policy;
pub(crate) mod rules;

pub use config::EligibilityConfig;
pub use policy::{DeclineReason, EligibilityDecision, EligibilityTier};

use rules::{ClassificationSignals, RULES};
use tracing::trace;

/// Stateless classifier applying the ordered rule table to one applicant.
#[derive(Debug, Clone, Default)]
pub struct EligibilityClassifier {
    config: EligibilityConfig,
}

impl EligibilityClassifier {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    pub fn classify(&self, credit_score: f64, annual_income: f64, dti: f64) -> EligibilityDecision {
        let signals = ClassificationSignals {
            credit_score,
            annual_income,
            dti,
        };

        match RULES
            .iter()
            .find(|rule| (rule.applies)(&signals, &self.config))
        {
            Some(rule) => {
                trace!(rule = rule.name, "eligibility rule matched");
                (rule.decide)(&signals, &self.config)
            }
            None => rules::further_review(),
        }
    }
}
