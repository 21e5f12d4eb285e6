use crate::workflows::loan::EligibilityConfig;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub eligibility: EligibilityConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("LOAN_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("LOAN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = EligibilityConfig::default();
        let eligibility = EligibilityConfig {
            approval_min_credit_score: threshold(
                "LOAN_APPROVAL_MIN_CREDIT_SCORE",
                defaults.approval_min_credit_score,
            )?,
            approval_min_annual_income: threshold(
                "LOAN_APPROVAL_MIN_ANNUAL_INCOME",
                defaults.approval_min_annual_income,
            )?,
            approval_max_dti: threshold("LOAN_APPROVAL_MAX_DTI", defaults.approval_max_dti)?,
            decline_credit_score_floor: threshold(
                "LOAN_DECLINE_CREDIT_SCORE_FLOOR",
                defaults.decline_credit_score_floor,
            )?,
            decline_annual_income_floor: threshold(
                "LOAN_DECLINE_ANNUAL_INCOME_FLOOR",
                defaults.decline_annual_income_floor,
            )?,
            decline_max_dti: threshold("LOAN_DECLINE_MAX_DTI", defaults.decline_max_dti)?,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            eligibility,
        })
    }
}

fn threshold(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(ConfigError::InvalidThreshold { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidThreshold { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { key, value } => {
                write!(f, "{key} must be a finite number (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
