use std::sync::LazyLock;

use regex::Regex;

use super::{group, scan_with};
use crate::parsing::entities::types::{Tag, TagMatch};

/// `[DEPARTMENT:name]`, a decorative label with nowhere to navigate to.
pub struct Department;

impl Department {
    pub const NAME: &'static str = "DEPARTMENT";

    pub fn scan(text: &str) -> Vec<TagMatch> {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(r"\[{}:([^\]]+)\]", Department::NAME)).expect("valid regex")
        });
        scan_with(&PATTERN, text, |caps| Tag::Department {
            name: group(caps, 1),
        })
    }
}
