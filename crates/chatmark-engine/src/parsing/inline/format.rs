use chatmark_config::LinkTargets;

use super::{parser::split_bold, types::InlineNode};
use crate::parsing::entities::{EntitySpan, SpanKind, extract_entities};

/// Turns extracted spans into inline nodes.
///
/// Plain-text spans are split on bold runs; tag spans become links and are
/// never scanned for bold. Output order follows span order.
pub fn format_spans(text: &str, spans: &[EntitySpan], targets: &LinkTargets) -> Vec<InlineNode> {
    spans
        .iter()
        .flat_map(|es| match &es.kind {
            SpanKind::PlainText => split_bold(es.span.slice(text)),
            SpanKind::Tag(tag) => vec![InlineNode::Link(tag.to_link(targets))],
        })
        .collect()
}

/// Extracts entities from `text` and formats the result.
pub fn format_inline(text: &str, targets: &LinkTargets) -> Vec<InlineNode> {
    format_spans(text, &extract_entities(text), targets)
}
