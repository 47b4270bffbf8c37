//! # Block Classification
//!
//! Line-by-line classification of message prose into blocks.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `NumberedBody`, `CompoundEntry`, `Trailer`, `EmploymentTag`
//! - **`kinds`**: Line kinds with owned markers (Header, Bullet, NumberedItem)
//! - **`compound`**: `EmploymentVocabulary` and the compound-token rule for
//!   numbered items
//! - **`classify`**: `LineClassifier` turning each line into one `Block`
//!
//! ## Key Invariants
//!
//! - One source line produces exactly one block; blank lines are never merged
//! - Header text is never passed through tag or bold parsing

pub mod classify;
pub mod compound;
pub mod kinds;
pub mod types;

pub use classify::LineClassifier;
pub use compound::EmploymentVocabulary;
pub use types::{Block, CompoundEntry, EmploymentTag, NumberedBody, Trailer};
