use std::fmt;

use serde::Serialize;

/// A rendered inline node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text, shown as-is.
    Text(String),
    /// Emphasised text with its `**` markers removed.
    Bold(String),
    /// An activatable element produced from a bracket tag.
    Link(Link),
}

impl InlineNode {
    /// The text a reader sees for this node.
    pub fn visible_text(&self) -> &str {
        match self {
            InlineNode::Text(text) | InlineNode::Bold(text) => text,
            InlineNode::Link(link) => &link.label,
        }
    }
}

/// Visual category of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Phone,
    Emergency,
    Doctor,
    DoctorProfile,
    DoctorsList,
    Location,
    Department,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Phone => "phone",
            LinkKind::Emergency => "emergency",
            LinkKind::Doctor => "doctor",
            LinkKind::DoctorProfile => "doctor_profile",
            LinkKind::DoctorsList => "doctors_list",
            LinkKind::Location => "location",
            LinkKind::Department => "department",
        }
    }

    /// Phone-like links are activated by dialling rather than navigating.
    pub fn is_dialable(self) -> bool {
        matches!(self, LinkKind::Phone | LinkKind::Emergency)
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub kind: LinkKind,
    pub label: String,
    /// Navigation target; `None` for decorative tags.
    pub target: Option<String>,
}

impl Link {
    /// The URI to activate: `tel:` for phone-like links, the target otherwise.
    pub fn href(&self) -> Option<String> {
        let target = self.target.as_deref()?;
        if self.kind.is_dialable() {
            Some(format!("tel:{target}"))
        } else {
            Some(target.to_string())
        }
    }
}
