/// True when the text holds anything outside the ASCII range.
pub fn is_non_ascii(text: &str) -> bool {
    !text.is_ascii()
}
