mod markdown;
mod validation;
pub mod views;

pub use markdown::render_markdown;
pub use validation::{FieldPresence, NumericRuleCheck, ValidationSummary};
