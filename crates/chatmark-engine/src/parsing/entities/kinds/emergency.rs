use std::sync::LazyLock;

use regex::Regex;

use super::{group, scan_with};
use crate::parsing::entities::types::{Tag, TagMatch};

/// `[EMERGENCY:number]`. Same shape as a telephone tag minus parentheses.
pub struct Emergency;

impl Emergency {
    pub const NAME: &'static str = "EMERGENCY";

    pub fn scan(text: &str) -> Vec<TagMatch> {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(r"\[{}:([0-9\s\-+]+)\]", Emergency::NAME)).expect("valid regex")
        });
        scan_with(&PATTERN, text, |caps| Tag::Emergency {
            number: group(caps, 1),
        })
    }
}
