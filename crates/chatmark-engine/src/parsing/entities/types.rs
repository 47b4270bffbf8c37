use std::fmt;

use chatmark_config::LinkTargets;
use serde::Serialize;

use super::kinds::{
    Department, Doctor, DoctorProfile, DoctorsList, Emergency, Location, Telephone,
};
use crate::parsing::{
    inline::{Link, LinkKind},
    span::Span,
};

/// An actionable tag with its raw captures, exactly as written in the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Tag {
    /// `[TEL:number]`
    Telephone { number: String },
    /// `[EMERGENCY:number]`
    Emergency { number: String },
    /// `[DOCTOR:name]`
    Doctor { name: String },
    /// `[DOCTORPROFILE:name|specialty|slug]`
    DoctorProfile {
        name: String,
        specialty: String,
        slug: String,
    },
    /// `[DOCTORSLIST:caption]`
    DoctorsList { caption: String },
    /// `[LOCATION:place]`
    Location { place: String },
    /// `[DEPARTMENT:name]`
    Department { name: String },
}

impl Tag {
    /// Resolves the tag into a navigable link.
    ///
    /// Phone numbers keep their label as written; the target drops all
    /// whitespace so it can be dialled. Location targets come from config and
    /// ignore the label. Departments are decorative and have no target.
    pub fn to_link(&self, targets: &LinkTargets) -> Link {
        match self {
            Tag::Telephone { number } => Link {
                kind: LinkKind::Phone,
                label: number.clone(),
                target: Some(dial_string(number)),
            },
            Tag::Emergency { number } => Link {
                kind: LinkKind::Emergency,
                label: number.clone(),
                target: Some(dial_string(number)),
            },
            Tag::Doctor { name } => Link {
                kind: LinkKind::Doctor,
                label: name.clone(),
                target: Some(targets.doctor_directory.clone()),
            },
            Tag::DoctorProfile {
                name,
                specialty,
                slug,
            } => Link {
                kind: LinkKind::DoctorProfile,
                label: name.clone(),
                target: Some(format!(
                    "{}/{specialty}/{slug}",
                    targets.doctor_profile_base
                )),
            },
            Tag::DoctorsList { caption } => Link {
                kind: LinkKind::DoctorsList,
                label: caption.clone(),
                target: Some(targets.doctor_directory.clone()),
            },
            Tag::Location { place } => Link {
                kind: LinkKind::Location,
                label: place.clone(),
                target: Some(targets.map_search.clone()),
            },
            Tag::Department { name } => Link {
                kind: LinkKind::Department,
                label: name.clone(),
                target: None,
            },
        }
    }
}

fn dial_string(number: &str) -> String {
    number.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Writes the wire form of the tag, which the extractor parses back.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Telephone { number } => write!(f, "[{}:{number}]", Telephone::NAME),
            Tag::Emergency { number } => write!(f, "[{}:{number}]", Emergency::NAME),
            Tag::Doctor { name } => write!(f, "[{}:{name}]", Doctor::NAME),
            Tag::DoctorProfile {
                name,
                specialty,
                slug,
            } => write!(
                f,
                "[{}:{name}{sep}{specialty}{sep}{slug}]",
                DoctorProfile::NAME,
                sep = DoctorProfile::FIELD_SEPARATOR
            ),
            Tag::DoctorsList { caption } => write!(f, "[{}:{caption}]", DoctorsList::NAME),
            Tag::Location { place } => write!(f, "[{}:{place}]", Location::NAME),
            Tag::Department { name } => write!(f, "[{}:{name}]", Department::NAME),
        }
    }
}

/// Classification of an extracted span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SpanKind {
    PlainText,
    Tag(Tag),
}

/// A contiguous range of the message, either plain text or one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySpan {
    pub span: Span,
    pub kind: SpanKind,
}

impl EntitySpan {
    pub fn plain(start: usize, end: usize) -> Self {
        Self {
            span: Span::new(start, end),
            kind: SpanKind::PlainText,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::PlainText)
    }
}

/// A single pattern hit before gaps are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Full span including the brackets.
    pub span: Span,
    pub tag: Tag,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn telephone_target_strips_whitespace() {
        let tag = Tag::Telephone {
            number: "+91 98765 43210".into(),
        };
        let link = tag.to_link(&LinkTargets::default());
        assert_eq!(link.label, "+91 98765 43210");
        assert_eq!(link.target.as_deref(), Some("+919876543210"));
    }

    #[test]
    fn doctor_profile_target_uses_segments_verbatim() {
        let targets = LinkTargets {
            doctor_profile_base: "https://example.org/doctors".into(),
            ..LinkTargets::default()
        };
        let tag = Tag::DoctorProfile {
            name: "Dr. A".into(),
            specialty: "cardiology".into(),
            slug: "Dr A".into(),
        };
        let link = tag.to_link(&targets);
        assert_eq!(
            link.target.as_deref(),
            Some("https://example.org/doctors/cardiology/Dr A")
        );
    }

    #[test]
    fn location_target_ignores_label() {
        let targets = LinkTargets::default();
        let a = Tag::Location {
            place: "Arts College Road".into(),
        }
        .to_link(&targets);
        let b = Tag::Location {
            place: "Main Gate".into(),
        }
        .to_link(&targets);
        assert_eq!(a.target, b.target);
        assert_eq!(a.target.as_deref(), Some(targets.map_search.as_str()));
    }

    #[test]
    fn department_has_no_target() {
        let link = Tag::Department {
            name: "Cardiology".into(),
        }
        .to_link(&LinkTargets::default());
        assert_eq!(link.kind, LinkKind::Department);
        assert_eq!(link.target, None);
    }

    #[test]
    fn display_writes_wire_syntax() {
        let tag = Tag::DoctorProfile {
            name: "Dr. A".into(),
            specialty: "cardiology".into(),
            slug: "dr-a".into(),
        };
        assert_eq!(tag.to_string(), "[DOCTORPROFILE:Dr. A|cardiology|dr-a]");
        assert_eq!(
            Tag::Emergency {
                number: "108".into()
            }
            .to_string(),
            "[EMERGENCY:108]"
        );
    }
}
