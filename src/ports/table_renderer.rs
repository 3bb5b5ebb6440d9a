//! Boxed text table renderer.
//!
//! Draws the summary tables in the familiar `+---+` grid used by console
//! table printers.

use crate::error::{RepoError, Result};

/// A header plus rows of the same arity.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(header: &[S]) -> Self {
        Self {
            header: header.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; its arity must match the header.
    pub fn add_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.header.len() {
            return Err(RepoError::InvalidData(format!(
                "row has {} cell(s) but table has {} column(s)",
                row.len(),
                self.header.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct TableRenderer;

impl TableRenderer {
    /// Render a table as a string.
    pub fn render(table: &Table) -> String {
        let widths = Self::column_widths(table);
        let rule = Self::rule(&widths);

        let mut lines = Vec::with_capacity(table.rows.len() + 4);
        lines.push(rule.clone());
        lines.push(Self::row_line(&table.header, &widths, true));
        lines.push(rule.clone());
        for row in &table.rows {
            lines.push(Self::row_line(row, &widths, false));
        }
        lines.push(rule);

        lines.join("\n")
    }

    fn column_widths(table: &Table) -> Vec<usize> {
        let mut widths: Vec<usize> = table.header.iter().map(|h| h.chars().count()).collect();
        for row in &table.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn rule(widths: &[usize]) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+", segments.join("+"))
    }

    // Header cells are centred, body cells left-aligned.
    fn row_line(cells: &[String], widths: &[usize], centred: bool) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, &w)| {
                if centred {
                    format!(" {:^w$} ", cell, w = w)
                } else {
                    format!(" {:<w$} ", cell, w = w)
                }
            })
            .collect();
        format!("|{}|", padded.join("|"))
    }
}
