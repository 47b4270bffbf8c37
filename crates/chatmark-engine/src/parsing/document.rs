use std::fmt;

use serde::Serialize;

use super::{
    blocks::{Block, CompoundEntry, NumberedBody, Trailer},
    inline::InlineNode,
    tables::Table,
};

/// The rendered form of one message: an ordered list of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentDocument {
    pub blocks: Vec<Block>,
}

impl ContentDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Projects the document to the lines a reader would see, in order.
    ///
    /// Spacers give empty lines. Markers (bullet glyphs, item numbers, bold
    /// asterisks) are not included; each table row gives one line with cells
    /// joined by ` | `.
    pub fn visible_text(&self) -> Vec<String> {
        let mut out = vec![];
        collect_visible(&self.blocks, &mut out);
        out
    }
}

fn collect_visible(blocks: &[Block], out: &mut Vec<String>) {
    for block in blocks {
        match block {
            Block::Header(title) => out.push(title.clone()),
            Block::Spacer => out.push(String::new()),
            Block::Bullet(nodes) | Block::Paragraph(nodes) => out.push(inline_text(nodes)),
            Block::Numbered { body, .. } => out.push(match body {
                NumberedBody::Inline(nodes) => inline_text(nodes),
                NumberedBody::Entry(entry) => format!("{} - {}", entry.name, trailer_text(entry)),
            }),
            Block::Table(table) => {
                out.push(table.headers.join(" | "));
                out.extend(table.rows.iter().map(|row| row.join(" | ")));
            }
            Block::Section(children) => collect_visible(children, out),
        }
    }
}

fn inline_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::visible_text).collect()
}

fn trailer_text(entry: &CompoundEntry) -> &str {
    match &entry.trailer {
        Trailer::Employment(tag) => &tag.label,
        Trailer::Text(text) => text,
    }
}

/// Plain-text outline, one line per block.
///
/// Headers get `# `, spacers are `~`, bold is written back with `**`, links
/// as `[label](kind: target)` and section contents are indented two spaces.
impl fmt::Display for ContentDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_blocks(f, &self.blocks, 0)
    }
}

fn write_blocks(f: &mut fmt::Formatter<'_>, blocks: &[Block], depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    for block in blocks {
        match block {
            Block::Header(title) => writeln!(f, "{indent}# {title}")?,
            Block::Spacer => writeln!(f, "{indent}~")?,
            Block::Bullet(nodes) => {
                write!(f, "{indent}• ")?;
                write_inline(f, nodes)?;
                writeln!(f)?;
            }
            Block::Numbered { number, body } => {
                write!(f, "{indent}{number}. ")?;
                match body {
                    NumberedBody::Inline(nodes) => write_inline(f, nodes)?,
                    NumberedBody::Entry(entry) => write_entry(f, entry)?,
                }
                writeln!(f)?;
            }
            Block::Paragraph(nodes) => {
                write!(f, "{indent}")?;
                write_inline(f, nodes)?;
                writeln!(f)?;
            }
            Block::Table(table) => write_table(f, table, &indent)?,
            Block::Section(children) => write_blocks(f, children, depth + 1)?,
        }
    }
    Ok(())
}

fn write_inline(f: &mut fmt::Formatter<'_>, nodes: &[InlineNode]) -> fmt::Result {
    for node in nodes {
        match node {
            InlineNode::Text(text) => f.write_str(text)?,
            InlineNode::Bold(text) => write!(f, "**{text}**")?,
            InlineNode::Link(link) => match &link.target {
                Some(target) => write!(f, "[{}]({}: {target})", link.label, link.kind)?,
                None => write!(f, "[{}]({})", link.label, link.kind)?,
            },
        }
    }
    Ok(())
}

fn write_entry(f: &mut fmt::Formatter<'_>, entry: &CompoundEntry) -> fmt::Result {
    match &entry.trailer {
        Trailer::Employment(tag) => {
            write!(f, "**{}** - {} ({})", entry.name, tag.label, tag.category)
        }
        Trailer::Text(text) => write!(f, "**{}** - {text}", entry.name),
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, table: &Table, indent: &str) -> fmt::Result {
    writeln!(f, "{indent}| {} |", table.headers.join(" | "))?;
    for row in &table.rows {
        writeln!(f, "{indent}| {} |", row.join(" | "))?;
    }
    Ok(())
}
