/// Closing line of every report, inviting a 1-5 rating.
pub const FEEDBACK_PROMPT: &str =
    "Would you like detailed calculations for any specific applicant? Rate this analysis (1-5).";

const POSITIVE_RATING: i32 = 4;

pub fn handle_feedback(rating: i32) -> &'static str {
    if rating >= POSITIVE_RATING {
        "Thank you for your positive feedback!"
    } else {
        "How can we improve our loan evaluation process?"
    }
}
