//! # Inline Formatting
//!
//! Turns a line remainder into [`InlineNode`]s: tags become links first, then
//! the plain-text gaps between them are split on `**bold**` runs.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode`, `Link`, `LinkKind`
//! - **`bold`**: `Bold` marker constant
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `split_bold()` over a single plain-text span
//! - **`format`**: `format_spans()` / `format_inline()` over extracted spans
//!
//! Link labels are never scanned for bold: only plain-text spans reach the
//! bold parser.

pub mod bold;
pub mod cursor;
pub mod format;
pub mod parser;
pub mod types;

pub use format::{format_inline, format_spans};
pub use parser::split_bold;
pub use types::{InlineNode, Link, LinkKind};
