use std::sync::LazyLock;

use regex::Regex;

use super::{group, scan_with};
use crate::parsing::entities::types::{Tag, TagMatch};

/// `[DOCTOR:name]`, linking to the doctor directory.
pub struct Doctor;

impl Doctor {
    pub const NAME: &'static str = "DOCTOR";

    pub fn scan(text: &str) -> Vec<TagMatch> {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(r"\[{}:([^\]]+)\]", Doctor::NAME)).expect("valid regex")
        });
        scan_with(&PATTERN, text, |caps| Tag::Doctor {
            name: group(caps, 1),
        })
    }
}
