use chatmark_config::TableConfig;

use super::{PipeTable, Table};

/// Parses one table segment.
///
/// Returns `None` for segments shorter than two lines. Line 0 is the header;
/// when it has no cells the header is `Column 1..N`, with N taken from
/// `default_columns` (or the stock default when that is zero).
/// If line 1 is not a `---` separator, one is assumed to sit there, so data
/// rows start at line 1; otherwise they start at line 2. Rows without any
/// non-empty cell are dropped and the rest are padded with `""` or truncated
/// from the right to the header width.
pub fn parse_table(lines: &[&str], default_columns: usize) -> Option<Table> {
    let [header_line, second, ..] = lines else {
        return None;
    };

    let data_start = if PipeTable::is_separator(second) { 2 } else { 1 };

    let mut headers: Vec<String> = PipeTable::cells(header_line)
        .into_iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        let columns = match default_columns {
            0 => TableConfig::default().default_column_count,
            n => n,
        };
        headers = (1..=columns).map(|n| format!("Column {n}")).collect();
    }

    let mut table = Table {
        headers,
        rows: vec![],
    };
    let width = table.column_count();
    table.rows = lines[data_start..]
        .iter()
        .map(|line| PipeTable::cells(line))
        .filter(|cells| !cells.is_empty())
        .map(|cells| fit_row(cells, width))
        .collect();

    Some(table)
}

fn fit_row(cells: Vec<&str>, width: usize) -> Vec<String> {
    let mut row: Vec<String> = cells.into_iter().take(width).map(str::to_string).collect();
    row.resize(width, String::new());
    row
}
