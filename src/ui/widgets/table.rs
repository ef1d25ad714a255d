use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Column-aligned rows of plain text
#[derive(Debug, Clone)]
pub struct Table {
    aligns: Vec<Align>,
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

const GAP: &str = "  ";

impl Table {
    pub fn new(aligns: Vec<Align>) -> Self {
        Self {
            aligns,
            header: None,
            rows: Vec::new(),
        }
    }

    pub fn header<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.header = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.aligns.len()];
        for row in self.header.iter().chain(self.rows.iter()) {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }

    /// One string per line; a rule separates the header from the rows
    pub fn render_lines(&self, supports_unicode: bool) -> Vec<String> {
        let widths = self.column_widths();
        let mut lines = Vec::new();

        if let Some(header) = &self.header {
            lines.push(self.render_row(header, &widths));
            let total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
            lines.push(BorderChar::Horizontal.render(supports_unicode).repeat(total));
        }

        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }
        lines
    }

    fn render_row(&self, cells: &[String], widths: &[usize]) -> String {
        let rendered: Vec<String> = widths
            .iter()
            .zip(&self.aligns)
            .enumerate()
            .map(|(i, (&width, align))| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = " ".repeat(width.saturating_sub(cell.width()));
                match align {
                    Align::Left => format!("{cell}{pad}"),
                    Align::Right => format!("{pad}{cell}"),
                }
            })
            .collect();
        rendered.join(GAP).trim_end().to_string()
    }
}
