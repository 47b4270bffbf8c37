use std::sync::LazyLock;

use regex::Regex;

use super::{group, scan_with};
use crate::parsing::entities::types::{Tag, TagMatch};

/// `[DOCTORSLIST:caption]`, a call to action for the full directory.
pub struct DoctorsList;

impl DoctorsList {
    pub const NAME: &'static str = "DOCTORSLIST";

    pub fn scan(text: &str) -> Vec<TagMatch> {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(r"\[{}:([^\]]+)\]", DoctorsList::NAME)).expect("valid regex")
        });
        scan_with(&PATTERN, text, |caps| Tag::DoctorsList {
            caption: group(caps, 1),
        })
    }
}
