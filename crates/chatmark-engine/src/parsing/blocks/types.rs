use chatmark_config::EmploymentCategory;
use serde::Serialize;

use crate::parsing::{inline::InlineNode, tables::Table};

/// A line- or document-level rendering unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Block {
    /// A title line. Its text is shown verbatim, without tag or bold parsing.
    Header(String),
    /// One blank source line.
    Spacer,
    Bullet(Vec<InlineNode>),
    Numbered { number: String, body: NumberedBody },
    Paragraph(Vec<InlineNode>),
    Table(Table),
    /// Prose found between tables, classified on its own.
    Section(Vec<Block>),
}

/// Content of a numbered list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum NumberedBody {
    Inline(Vec<InlineNode>),
    /// A `name - ... - category` entry recognised by the compound-token rule.
    Entry(CompoundEntry),
}

/// A name (shown emphasised) with a trailing category or note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundEntry {
    pub name: String,
    pub trailer: Trailer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Trailer {
    Employment(EmploymentTag),
    /// Plain trailing text.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmploymentTag {
    /// The token as written, e.g. `Full Time`.
    pub label: String,
    pub category: EmploymentCategory,
}
