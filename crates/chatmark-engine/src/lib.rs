//! Renders chat messages written in a lightweight markup (bold runs, bullet
//! and numbered lists, headers, pipe tables and bracketed action tags) into a
//! typed [`ContentDocument`].
//!
//! ```
//! use chatmark_engine::{Block, render_message};
//!
//! let doc = render_message("**Cardiology**\nCall [TEL:0422 432 4324]");
//! assert_eq!(doc.blocks[0], Block::Header("Cardiology".into()));
//! ```

pub mod error;
pub mod parsing;

// Re-export key types for easier usage
pub use chatmark_config::{Config, EmploymentCategory};
pub use error::EngineError;
pub use parsing::{
    MessageRenderer,
    blocks::{Block, CompoundEntry, EmploymentTag, NumberedBody, Trailer},
    document::ContentDocument,
    entities::{EntitySpan, SpanKind, Tag, extract_entities},
    inline::{InlineNode, Link, LinkKind, format_inline},
    render_message,
    span::Span,
    tables::Table,
};
