pub mod blocks;
pub mod document;
pub mod entities;
pub mod inline;
pub mod span;
pub mod tables;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use chatmark_config::Config;

use crate::error::EngineError;
use blocks::{Block, EmploymentVocabulary, LineClassifier};
use document::ContentDocument;
use tables::{PipeTable, Segment, parse_table, segment_lines};

/// Renders raw chat messages into [`ContentDocument`]s.
///
/// A renderer holds only compiled, read-only state and can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct MessageRenderer {
    classifier: LineClassifier,
    default_column_count: usize,
    max_nesting_depth: usize,
}

impl MessageRenderer {
    /// Builds a renderer, compiling the configured employment vocabulary.
    pub fn new(config: &Config) -> Result<Self, EngineError> {
        let vocabulary = EmploymentVocabulary::from_config(&config.employment)?;
        Ok(Self {
            classifier: LineClassifier::new(config.links.clone(), vocabulary),
            default_column_count: config.tables.default_column_count,
            max_nesting_depth: config.limits.max_nesting_depth,
        })
    }

    pub fn render(&self, raw: &str) -> ContentDocument {
        ContentDocument::new(self.render_blocks(raw, 0))
    }

    /// Renders `content` found at section nesting `depth`.
    ///
    /// Text segments contain no table lines, so a nested call always ends in
    /// the line classifier; `max_nesting_depth` only bounds the recursion.
    fn render_blocks(&self, content: &str, depth: usize) -> Vec<Block> {
        if !PipeTable::has_markers(content) {
            return self.classifier.classify_lines(content);
        }
        if depth > self.max_nesting_depth {
            log::debug!("nesting depth {depth} exceeds limit, classifying lines only");
            return self.classifier.classify_lines(content);
        }

        let segments = segment_lines(content);
        if !segments.iter().any(|s| matches!(s, Segment::Table(_))) {
            return self.classifier.classify_lines(content);
        }

        log::debug!("table mode at depth {depth}: {} segments", segments.len());
        let mut out = vec![];
        for segment in segments {
            match segment {
                Segment::Table(lines) => match parse_table(&lines, self.default_column_count) {
                    Some(table) => out.push(Block::Table(table)),
                    None => log::debug!("dropping table block with {} line(s)", lines.len()),
                },
                Segment::Text(lines) => {
                    let text = lines.join("\n");
                    out.push(Block::Section(self.render_blocks(&text, depth + 1)));
                }
            }
        }
        out
    }
}

static DEFAULT_RENDERER: LazyLock<MessageRenderer> = LazyLock::new(|| {
    MessageRenderer::new(&Config::default()).expect("default vocabulary compiles")
});

/// Renders `raw` with the default configuration.
pub fn render_message(raw: &str) -> ContentDocument {
    DEFAULT_RENDERER.render(raw)
}
