use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly income and the debt-to-income ratio derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DtiResult {
    pub monthly_income: f64,
    pub dti: f64,
}

/// Compute monthly income and the DTI ratio rounded to two places.
///
/// `annual_income` must be positive; the record validator guarantees this for
/// every applicant that reaches the calculator.
pub fn calculate_dti(annual_income: f64, monthly_debt: f64) -> DtiResult {
    let monthly_income = annual_income / MONTHS_PER_YEAR;
    DtiResult {
        monthly_income,
        dti: round_to_cents(monthly_debt / monthly_income),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
