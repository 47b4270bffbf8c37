//! # Tag Kinds
//!
//! One type per bracket tag. Each owns its tag name and pattern and scans the
//! whole input independently of the others.
//!
//! ## Types
//!
//! - **`Telephone`**: `[TEL:number]`
//! - **`Emergency`**: `[EMERGENCY:number]`
//! - **`Doctor`**: `[DOCTOR:name]`
//! - **`DoctorProfile`**: `[DOCTORPROFILE:name|specialty|slug]`
//! - **`DoctorsList`**: `[DOCTORSLIST:caption]`
//! - **`Location`**: `[LOCATION:place]`
//! - **`Department`**: `[DEPARTMENT:name]`

use regex::{Captures, Regex};

use super::types::{Tag, TagMatch};
use crate::parsing::span::Span;

pub mod department;
pub mod doctor;
pub mod doctor_profile;
pub mod doctors_list;
pub mod emergency;
pub mod location;
pub mod telephone;

pub use department::Department;
pub use doctor::Doctor;
pub use doctor_profile::DoctorProfile;
pub use doctors_list::DoctorsList;
pub use emergency::Emergency;
pub use location::Location;
pub use telephone::Telephone;

/// Runs `pattern` over `text`, turning every hit into a [`TagMatch`].
fn scan_with(pattern: &Regex, text: &str, build: impl Fn(&Captures<'_>) -> Tag) -> Vec<TagMatch> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            Some(TagMatch {
                span: Span::new(full.start(), full.end()),
                tag: build(&caps),
            })
        })
        .collect()
}

/// Text of capture group `i`, or `""` if it didn't participate.
fn group(caps: &Captures<'_>, i: usize) -> String {
    caps.get(i).map_or_else(String::new, |m| m.as_str().to_string())
}
