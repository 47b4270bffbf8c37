use std::sync::LazyLock;

use regex::Regex;

use super::{group, scan_with};
use crate::parsing::entities::types::{Tag, TagMatch};

/// `[DOCTORPROFILE:name|specialty|slug]`.
///
/// The three fields are split on `|` with no escaping. The name and specialty
/// may not contain `|`; the slug runs up to the first `]`.
pub struct DoctorProfile;

impl DoctorProfile {
    pub const NAME: &'static str = "DOCTORPROFILE";
    pub const FIELD_SEPARATOR: char = '|';

    pub fn scan(text: &str) -> Vec<TagMatch> {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(
                r"\[{}:([^|]+)\|([^|]+)\|([^\]]+)\]",
                DoctorProfile::NAME
            ))
            .expect("valid regex")
        });
        scan_with(&PATTERN, text, |caps| Tag::DoctorProfile {
            name: group(caps, 1),
            specialty: group(caps, 2),
            slug: group(caps, 3),
        })
    }
}
