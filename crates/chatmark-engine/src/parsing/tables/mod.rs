//! # Pipe Tables
//!
//! Document-level detection and parsing of `|`-delimited tables.
//!
//! ## Modules
//!
//! - **`segment`**: Splits a message into alternating table and text segments
//! - **`parser`**: Turns one table segment into a rectangular [`Table`]
//!
//! ## Key Invariants
//!
//! - Table mode only starts when the message contains both `|` and `---`
//! - Every row of a parsed table has exactly `headers.len()` cells
//! - Cells are raw trimmed text; tags and bold markers inside them stay literal

use serde::Serialize;

pub mod parser;
pub mod segment;

pub use parser::parse_table;
pub use segment::{Segment, SegmentBuilder, segment_lines};

/// A parsed table with a fixed column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Pipe table syntax with owned delimiter constants.
pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';
    /// Marks a header separator line, and is one half of the table gate.
    pub const RULE: &'static str = "---";

    /// Returns true if `message` may contain a table at all.
    pub fn has_markers(message: &str) -> bool {
        message.contains(Self::PIPE) && message.contains(Self::RULE)
    }

    /// A line belongs to a table iff its trimmed form starts with a pipe.
    pub fn is_table_line(line: &str) -> bool {
        line.trim_start().starts_with(Self::PIPE)
    }

    pub fn is_separator(line: &str) -> bool {
        line.contains(Self::RULE)
    }

    /// Splits a table line into its non-empty trimmed cells.
    pub fn cells(line: &str) -> Vec<&str> {
        line.split(Self::PIPE)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect()
    }
}
