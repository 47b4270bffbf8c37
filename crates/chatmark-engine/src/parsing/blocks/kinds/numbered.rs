/// Numbered list line type.
///
/// `<ascii digits>.<whitespace><rest>`; the number keeps only its digits.
pub struct NumberedItem;

impl NumberedItem {
    pub const DELIMITER: char = '.';

    /// Splits a trimmed line into `(digits, rest)`.
    ///
    /// `rest` has its leading whitespace removed and is never empty, since a
    /// trimmed line can't end in the whitespace that must follow the dot.
    pub fn split(trimmed: &str) -> Option<(&str, &str)> {
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if digits_end == 0 {
            return None;
        }
        let after = trimmed[digits_end..].strip_prefix(Self::DELIMITER)?;
        let rest = after.trim_start();
        if rest.len() == after.len() || rest.is_empty() {
            return None;
        }
        Some((&trimmed[..digits_end], rest))
    }
}
