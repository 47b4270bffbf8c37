use std::sync::LazyLock;

use regex::Regex;

use super::{group, scan_with};
use crate::parsing::entities::types::{Tag, TagMatch};

pub struct Location;

impl Location {
    pub const NAME: &'static str = "LOCATION";

    pub fn scan(text: &str) -> Vec<TagMatch> {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(r"\[{}:([^\]]+)\]", Location::NAME)).expect("valid regex")
        });
        scan_with(&PATTERN, text, |caps| Tag::Location {
            place: group(caps, 1),
        })
    }
}
