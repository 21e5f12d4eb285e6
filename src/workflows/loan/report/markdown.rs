use super::super::feedback::FEEDBACK_PROMPT;
use super::super::pipeline::{ApplicantAssessment, LoanAssessment};
use super::validation::ValidationSummary;
use std::fmt;

const PASS: &str = "✓";
const FAIL: &str = "✗";

/// Render the full markdown report for an evaluated batch.
pub fn render_markdown(assessment: &LoanAssessment) -> String {
    MarkdownReport(assessment).to_string()
}

struct MarkdownReport<'a>(&'a LoanAssessment);

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;
        write_validation_report(f, &assessment.validation)?;

        write!(f, "\n# Loan Application Summary\n")?;
        writeln!(
            f,
            "Total Applicants Evaluated: {}",
            assessment.applicants.len()
        )?;

        write!(f, "\n# Detailed Analysis\n")?;
        for applicant in &assessment.applicants {
            write_applicant(f, applicant)?;
        }

        write!(f, "\n# Feedback Request\n{FEEDBACK_PROMPT}")
    }
}

fn write_validation_report(f: &mut fmt::Formatter<'_>, summary: &ValidationSummary) -> fmt::Result {
    writeln!(f, "# Data Validation Report")?;

    writeln!(f, "## 1. Data Structure Check:")?;
    writeln!(f, "- Number of applications: {}", summary.application_count)?;
    write!(f, "- Number of fields: {}\n\n", summary.field_count)?;

    writeln!(f, "## 2. Required Fields Check:")?;
    for check in &summary.required_fields {
        writeln!(f, "- {}: {}", check.field, mark(check.present))?;
    }
    writeln!(f)?;

    writeln!(f, "## 3. Data Type Validation:")?;
    for rule in &summary.numeric_rules {
        writeln!(f, "- {}: {}", rule.label(), mark(rule.valid))?;
    }

    write!(f, "\n## Validation Summary:\n")?;
    if summary.all_valid() {
        writeln!(f, "Data validation is successful! Proceeding with analysis...")?;
    } else {
        writeln!(
            f,
            "Data validation failed. Please correct the errors and resubmit."
        )?;
    }

    write!(f, "\n# Formulas Used:\n")?;
    writeln!(f, "1. Monthly Income Formula:")?;
    write!(
        f,
        "   $\\text{{Monthly Income}} = \\frac{{\\text{{Annual Income}}}}{{12}}$\n\n"
    )?;
    writeln!(f, "2. Debt-to-Income (DTI) Ratio Formula:")?;
    write!(
        f,
        "   $\\text{{DTI}} = \\frac{{\\text{{Monthly Debt Payments}}}}{{\\text{{Monthly Income}}}}$\n\n"
    )
}

fn write_applicant(f: &mut fmt::Formatter<'_>, assessment: &ApplicantAssessment) -> fmt::Result {
    let record = &assessment.record;
    let annual_income = format_amount(record.annual_income);
    let monthly_debt = format_amount(record.monthly_debt_payments);
    let monthly_income = format_amount(assessment.dti.monthly_income);
    let dti = assessment.dti.dti;
    let status = assessment.decision.label();

    write!(f, "\n## Applicant {}\n", record.applicant_id)?;

    writeln!(f, "### Input Data:")?;
    writeln!(f, "- Credit Score: {}", record.credit_score)?;
    writeln!(f, "- Annual Income: ${annual_income}")?;
    writeln!(f, "- Monthly Debt Payments: ${monthly_debt}")?;

    write!(f, "\n### Detailed Calculations:\n")?;
    writeln!(f, "Monthly Income Calculation:")?;
    write!(
        f,
        "$\\text{{Monthly Income}} = \\frac{{{annual_income}}}{{12}} = {monthly_income}$\n\n"
    )?;
    writeln!(f, "DTI Calculation:")?;
    writeln!(
        f,
        "$\\text{{DTI}} = \\frac{{{monthly_debt}}}{{{monthly_income}}} = {dti}$"
    )?;

    write!(f, "\n### Final Eligibility Status: {status}\n")?;
    writeln!(f, "Explanation: {}", assessment.decision.explanation())?;

    write!(f, "\n### Application Summary:\n")?;
    writeln!(f, "- Credit Score: {}", record.credit_score)?;
    writeln!(f, "- Monthly Income: ${monthly_income}")?;
    writeln!(f, "- DTI Ratio: {dti}")?;
    writeln!(f, "- Status: {status}")
}

fn mark(ok: bool) -> &'static str {
    if ok {
        PASS
    } else {
        FAIL
    }
}

/// Two decimals with comma thousands separators, e.g. `60,000.00`.
pub(crate) fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{cents}")
}
