use chatmark_config::LinkTargets;

use super::{
    compound::EmploymentVocabulary,
    kinds::{Bullet, Header, NumberedItem},
    types::{Block, NumberedBody},
};
use crate::parsing::inline::{InlineNode, format_inline};

/// Classifies message lines into blocks.
///
/// Each line is classified on its own, on its trimmed form, with this
/// precedence: blank, header, bullet, numbered item, paragraph.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    targets: LinkTargets,
    vocabulary: EmploymentVocabulary,
}

impl LineClassifier {
    pub fn new(targets: LinkTargets, vocabulary: EmploymentVocabulary) -> Self {
        Self {
            targets,
            vocabulary,
        }
    }

    /// Classifies every line of `content`, top to bottom.
    ///
    /// Lines are split on `\n` only, so a trailing newline yields a final
    /// Spacer and each blank line yields exactly one.
    pub fn classify_lines(&self, content: &str) -> Vec<Block> {
        content.split('\n').map(|line| self.classify(line)).collect()
    }

    /// Classifies a single line (a trailing `\r` is trimmed with the rest).
    pub fn classify(&self, line: &str) -> Block {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Block::Spacer;
        }

        if let Some(title) = Header::strip(trimmed) {
            log::trace!("header: {title:?}");
            return Block::Header(title.to_string());
        }

        if let Some(rest) = Bullet::strip(trimmed) {
            log::trace!("bullet: {rest:?}");
            return Block::Bullet(self.inline(rest));
        }

        if let Some((number, rest)) = NumberedItem::split(trimmed) {
            log::trace!("numbered {number}: {rest:?}");
            return self.numbered(number, rest);
        }

        Block::Paragraph(self.inline(trimmed))
    }

    fn inline(&self, text: &str) -> Vec<InlineNode> {
        format_inline(text, &self.targets)
    }

    fn numbered(&self, number: &str, rest: &str) -> Block {
        let nodes = self.inline(rest);

        // A numbered line that is entirely bold is a category title
        if let [InlineNode::Bold(title)] = nodes.as_slice() {
            return Block::Header(title.clone());
        }

        let structured = nodes.iter().any(|n| !matches!(n, InlineNode::Text(_)));
        let body = if structured {
            NumberedBody::Inline(nodes)
        } else {
            match self.vocabulary.split_entry(rest) {
                Some(entry) => NumberedBody::Entry(entry),
                None => NumberedBody::Inline(nodes),
            }
        };

        Block::Numbered {
            number: number.to_string(),
            body,
        }
    }
}
