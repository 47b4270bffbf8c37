use super::PipeTable;

/// A contiguous run of message lines of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Table lines with at least one non-empty cell.
    Table(Vec<&'a str>),
    /// Non-blank prose lines between tables.
    Text(Vec<&'a str>),
}

#[derive(Debug)]
enum RunState<'a> {
    None,
    Table(Vec<&'a str>),
    Text(Vec<&'a str>),
}

/// Groups lines into alternating table and text segments.
///
/// A run ends when a line of the other kind arrives. Lines that carry no
/// content (blank prose, table lines with only empty cells) still extend the
/// current run but are not kept, and a run with nothing left is not emitted.
pub struct SegmentBuilder<'a> {
    run: RunState<'a>,
    out: Vec<Segment<'a>>,
}

impl<'a> SegmentBuilder<'a> {
    pub fn new() -> Self {
        Self {
            run: RunState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &'a str) {
        if PipeTable::is_table_line(line) {
            self.extend_table(line);
        } else {
            self.extend_text(line);
        }
    }

    pub fn finish(mut self) -> Vec<Segment<'a>> {
        // EOF flush
        self.flush();
        self.out
    }

    fn extend_table(&mut self, line: &'a str) {
        if !matches!(self.run, RunState::Table(_)) {
            self.flush();
            self.run = RunState::Table(vec![]);
        }
        if let RunState::Table(lines) = &mut self.run
            && !PipeTable::cells(line).is_empty()
        {
            lines.push(line);
        }
    }

    fn extend_text(&mut self, line: &'a str) {
        if !matches!(self.run, RunState::Text(_)) {
            self.flush();
            self.run = RunState::Text(vec![]);
        }
        if let RunState::Text(lines) = &mut self.run
            && !line.trim().is_empty()
        {
            lines.push(line);
        }
    }

    fn flush(&mut self) {
        let prev = std::mem::replace(&mut self.run, RunState::None);
        match prev {
            RunState::Table(lines) if !lines.is_empty() => self.out.push(Segment::Table(lines)),
            RunState::Text(lines) if !lines.is_empty() => self.out.push(Segment::Text(lines)),
            _ => {}
        }
    }
}

impl Default for SegmentBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Segments a whole message, splitting on `\n`.
pub fn segment_lines(message: &str) -> Vec<Segment<'_>> {
    let mut builder = SegmentBuilder::new();
    for line in message.split('\n') {
        builder.push(line);
    }
    builder.finish()
}
