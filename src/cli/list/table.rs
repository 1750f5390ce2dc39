use std::fmt::{self, Write};

use crate::color::{MaybePaint, TABLE_HEADER};

pub(crate) struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Header cells are used as field names by `awk` and friends, so they must
    /// be a single word.
    fn is_awk_safe(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| !cell.is_empty() && !cell.contains(char::is_whitespace))
    }

    fn columns(&self) -> usize {
        self.cells.len()
    }
}

pub(crate) trait IntoRow: Into<Row> + Sized {
    fn into_row(self) -> Row {
        self.into()
    }
}

impl<T> IntoRow for T where T: Into<Row> + Sized {}

impl From<Vec<String>> for Row {
    fn from(value: Vec<String>) -> Self {
        Row { cells: value }
    }
}

impl From<Vec<&str>> for Row {
    fn from(value: Vec<&str>) -> Self {
        let value: Vec<String> = value.into_iter().map(|s| s.to_owned()).collect();

        value.into()
    }
}

impl<const N: usize> From<[&str; N]> for Row {
    fn from(value: [&str; N]) -> Self {
        value.to_vec().into()
    }
}

pub(crate) struct Table {
    body: Vec<Row>,
    header: Option<Row>,
    num_columns: Option<usize>,
    print_header: bool,
}

impl Table {
    pub(crate) fn new() -> Table {
        Table {
            body: Vec::new(),
            header: None,
            num_columns: None,
            print_header: true,
        }
    }

    fn expect_num_columns(&mut self, num_columns: usize) {
        match self.num_columns {
            Some(prev_num_columns) if prev_num_columns != num_columns => panic!(
                "table has {} columns but a row with {} columns was inserted",
                prev_num_columns, num_columns
            ),
            Some(_) => {}
            None => self.num_columns = Some(num_columns),
        }
    }

    pub(crate) fn print_header(&mut self, print_header: bool) {
        self.print_header = print_header;
    }

    pub(crate) fn add_row<S: IntoRow>(&mut self, row: S) {
        let row = row.into_row();

        self.expect_num_columns(row.columns());

        self.body.push(row);
    }

    pub(crate) fn set_header<S: IntoRow>(&mut self, header: S) {
        let header = header.into_row();

        self.expect_num_columns(header.columns());

        if !header.is_awk_safe() {
            panic!("table header is not awk safe, contains whitespace")
        }

        self.header.replace(header);
    }

    fn visible_header(&self) -> Option<&Row> {
        self.header.as_ref().filter(|_| self.print_header)
    }

    /// Widths are measured in characters over the rows which will be printed.
    fn column_widths(&self) -> Vec<usize> {
        let n_cols = match self.num_columns {
            Some(n_cols) => n_cols,
            None => return Vec::new(),
        };

        let mut widths = vec![0usize; n_cols];

        for row in self.visible_header().into_iter().chain(self.body.iter()) {
            for (i, cell) in row.cells.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        widths
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    row: &Row,
    widths: &[usize],
    paint: impl Fn(String) -> String,
) -> fmt::Result {
    // Trailing empty cells are dropped so no line ends in padding
    let used = row
        .cells
        .iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(0, |i| i + 1);

    for (i, cell) in row.cells[..used].iter().enumerate() {
        // The final column is left ragged
        let cell = if i + 1 == used {
            cell.clone()
        } else {
            format!("{:<width$}  ", cell, width = widths[i])
        };

        f.write_str(&paint(cell))?;
    }

    f.write_char('\n')
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        if let Some(header) = self.visible_header() {
            // Padding stays outside the styled span so underlines end at the text
            write_row(f, header, &widths, |cell| {
                let text = cell.trim_end();
                let padding = cell.len() - text.len();

                format!("{}{}", TABLE_HEADER.maybe_paint(text), " ".repeat(padding))
            })?;
        }

        for row in &self.body {
            write_row(f, row, &widths, |cell| cell)?;
        }

        Ok(())
    }
}

pub(crate) trait IntoTable: Into<Table> + Sized {
    fn into_table(self) -> Table {
        self.into()
    }
}

impl<T> IntoTable for T where T: Into<Table> + Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    fn engines() -> Table {
        let mut tab = Table::new();

        tab.set_header(["ENGINE", "TYPE", "DEFAULT_MODEL"]);
        tab.add_row(["claude", "cloud", "claude-sonnet-4-20250514"]);
        tab.add_row(["ollama", "local", "qwen2.5-coder:7b"]);

        tab
    }

    #[test]
    fn aligns_columns() {
        let expected = "\
ENGINE  TYPE   DEFAULT_MODEL
claude  cloud  claude-sonnet-4-20250514
ollama  local  qwen2.5-coder:7b
";

        assert_eq!(engines().to_string(), expected);
    }

    #[test]
    fn headerless_table_ignores_header_width() {
        let mut tab = Table::new();

        tab.set_header(["MODEL", "CONTEXT_WINDOW"]);
        tab.add_row(["o1", "200000"]);
        tab.print_header(false);

        assert_eq!(tab.to_string(), "o1  200000\n");
    }

    #[test]
    fn cells_may_contain_spaces() {
        let mut tab = Table::new();

        tab.add_row(["gpt-4o", "GPT-4o (OpenAI)"]);

        assert_eq!(tab.to_string(), "gpt-4o  GPT-4o (OpenAI)\n");
    }

    #[test]
    fn trailing_empty_cells_are_not_padded() {
        let mut tab = Table::new();

        tab.add_row(["notes", ""]);
        tab.add_row(["context_window", "200000"]);

        assert_eq!(tab.to_string(), "notes\ncontext_window  200000\n");
    }

    #[test]
    fn empty_table_prints_nothing() {
        assert_eq!(Table::new().to_string(), "");
    }

    #[test]
    #[should_panic(expected = "not awk safe")]
    fn header_must_be_awk_safe() {
        let mut tab = Table::new();

        tab.set_header(["FULL NAME"]);
    }

    #[test]
    #[should_panic(expected = "columns")]
    fn rows_must_have_matching_columns() {
        let mut tab = engines();

        tab.add_row(["codex"]);
    }
}
