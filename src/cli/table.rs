/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            alignment,
        }
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Computes the content width of each column from headers and cells.
    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count();
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                width
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                match column.alignment {
                    Alignment::Left => format!("{:<width$}", cell, width = widths[idx]),
                    Alignment::Right => format!("{:>width$}", cell, width = widths[idx]),
                }
            })
            .collect();
        rendered.join("  ").trim_end().to_string()
    }

    /// Renders the full table with a header line and separator rule.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut out = self.render_row(&header, &widths);
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(rule.join("  ").trim_end());
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new(vec![
            TableColumn::new("No", Alignment::Right),
            TableColumn::new("Type", Alignment::Left),
            TableColumn::new("Amount", Alignment::Right),
            TableColumn::new("Description", Alignment::Left),
        ]);
        table.push_row(vec![
            "1".into(),
            "Income".into(),
            "5,000,000.00".into(),
            "salary".into(),
        ]);
        table.push_row(vec![
            "2".into(),
            "Expense".into(),
            "-150,000.00".into(),
            "lunch".into(),
        ]);
        table
    }

    #[test]
    fn renders_header_rule_and_rows() {
        let rendered = sample_table().render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("No"));
        assert!(lines[0].contains("Description"));
        assert!(lines[1].chars().all(|c| c == '-' || c == ' '));
        assert!(lines[2].contains("Income"));
        assert!(lines[3].contains("lunch"));
    }

    #[test]
    fn amount_column_is_right_aligned() {
        let rendered = sample_table().render();
        let lines: Vec<&str> = rendered.lines().collect();
        // Both amounts end at the same column.
        let end_2 = lines[2].find("5,000,000.00").unwrap() + "5,000,000.00".len();
        let end_3 = lines[3].find("-150,000.00").unwrap() + "-150,000.00".len();
        assert_eq!(end_2, end_3);
    }

    #[test]
    fn missing_cells_render_empty() {
        let mut table = Table::new(vec![
            TableColumn::new("A", Alignment::Left),
            TableColumn::new("B", Alignment::Left),
        ]);
        table.push_row(vec!["only".into()]);
        let rendered = table.render();
        assert!(rendered.lines().nth(2).unwrap().starts_with("only"));
    }
}
