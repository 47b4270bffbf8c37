use std::sync::LazyLock;

use regex::Regex;

use super::{group, scan_with};
use crate::parsing::entities::types::{Tag, TagMatch};

/// `[TEL:number]`, a dialable phone number.
///
/// The number may only contain digits, whitespace, `+`, `-` and parentheses;
/// anything else leaves the tag as literal text.
pub struct Telephone;

impl Telephone {
    pub const NAME: &'static str = "TEL";

    pub fn scan(text: &str) -> Vec<TagMatch> {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(r"\[{}:([0-9\s\-+()]+)\]", Telephone::NAME)).expect("valid regex")
        });
        scan_with(&PATTERN, text, |caps| Tag::Telephone {
            number: group(caps, 1),
        })
    }
}
