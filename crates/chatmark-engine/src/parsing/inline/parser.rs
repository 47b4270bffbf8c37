use crate::parsing::span::Span;

use super::{bold::Bold, cursor::Cursor, types::InlineNode};

/// A located bold run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoldRun {
    /// Full span including both markers.
    full: Span,
    /// Content between the markers.
    inner: Span,
}

/// Splits plain text into [`InlineNode::Text`] and [`InlineNode::Bold`] nodes.
///
/// Scanning is leftmost and non-greedy: `**a** and **b**` yields two bold
/// runs, and an unclosed `**` is left as text. Empty text between runs is not
/// emitted. Text without any bold run is returned as a single unchanged
/// `Text` node.
pub fn split_bold(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }.slice(s).to_string()));
        }
    }

    while !cur.eof() {
        if let Some(run) = try_parse_bold(&mut cur) {
            flush_text(&mut out, s, text_start, run.full.start);
            out.push(InlineNode::Bold(run.inner.slice(s).to_string()));
            text_start = run.full.end;
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());

    if out.is_empty() {
        out.push(InlineNode::Text(s.to_string()));
    }
    out
}

/// Attempts to parse a bold run starting at the current position.
///
/// Returns `None` if not at `**`, if the content would be empty, or if no
/// closing `**` follows on the same line. On failure, cursor position is
/// restored.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<BoldRun> {
    if !cur.starts_with(Bold::MARKER) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Bold::MARKER.len());
    let inner_start = cur.pos();

    // At least one character of content, even if it is itself a `*`
    match cur.bump() {
        None | Some(b'\n') => {
            *cur = saved;
            return None;
        }
        Some(_) => {}
    }

    while !cur.eof() && !cur.starts_with(Bold::MARKER) {
        if cur.peek() == Some(b'\n') {
            break;
        }
        cur.bump();
    }

    if !cur.starts_with(Bold::MARKER) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(Bold::MARKER.len());

    Some(BoldRun {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
