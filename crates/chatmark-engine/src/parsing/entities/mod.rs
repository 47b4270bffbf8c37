//! # Entity Extraction
//!
//! Locates actionable bracket tags (`[TEL:...]`, `[DOCTORPROFILE:a|b|c]`, ...)
//! in raw message text.
//!
//! ## Modules
//!
//! - **`types`**: `Tag`, `EntitySpan`, `SpanKind`, `TagMatch`
//! - **`kinds`**: One type per tag, owning its name and pattern
//! - **`extractor`**: `extract_entities()` merges every kind's hits into one
//!   ordered span sequence
//!
//! ## Merge Order
//!
//! Every tag kind scans the full input on its own. Hits are concatenated in
//! registration order and stable-sorted by start offset, so two hits at the
//! same offset keep registration order. Overlapping hits are not resolved.

pub mod extractor;
pub mod kinds;
pub mod types;

pub use extractor::{REGISTRY, extract_entities};
pub use types::{EntitySpan, SpanKind, Tag, TagMatch};
