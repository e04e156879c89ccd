//! # Table Model
//!
//! In-memory representation of a rendered table: headers, rows and cells.
//! [`Table`] also implements [`RenderingSurface`](crate::surface::RenderingSurface),
//! so it can stand in for the page when no browser is involved.
use std::fmt::Display;

pub(crate) mod cell;
pub(crate) mod column;

pub use cell::Cell;
pub use column::{ColumnHeader, Indicator};

/// Identity of a table on the page (its element id or selector).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(String);

impl TableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A body row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// False while a search filter hides the row
    pub visible: bool,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells, visible: true }
    }

    /// Builds a row of plain text cells.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Cell::new).collect())
    }

    /// Concatenated display text of every cell, separated by spaces.
    pub fn text_content(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A table held in memory.
#[derive(Clone, Debug)]
pub struct Table {
    pub(crate) id: TableId,
    pub(crate) headers: Vec<ColumnHeader>,
    pub(crate) rows: Vec<Row>,
}

impl Table {
    pub fn new(id: TableId, headers: Vec<ColumnHeader>, rows: Vec<Row>) -> Self {
        Self { id, headers, rows }
    }

    /// Builds a table from header labels and rows of plain text.
    pub fn from_texts<H, R, C, S>(id: &str, headers: H, rows: R) -> Self
    where
        H: IntoIterator<Item = S>,
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: TableId::new(id),
            headers: headers.into_iter().map(ColumnHeader::new).collect(),
            rows: rows.into_iter().map(Row::from_texts).collect(),
        }
    }

    pub fn id(&self) -> &TableId {
        &self.id
    }

    pub fn headers(&self) -> &[ColumnHeader] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Sort values of one column in current row order; None where a row has no such cell.
    pub fn column_values(&self, column: usize) -> Vec<Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.cells.get(column).map(Cell::sort_value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_texts() {
        let table = Table::from_texts("people", ["Name", "Age"], [["Ann", "31"], ["Bob", "27"]]);
        assert_eq!(table.id().as_str(), "people");
        assert_eq!(table.headers().len(), 2);
        assert_eq!(table.column_values(1), vec![Some("31"), Some("27")]);
        assert_eq!(table.column_values(5), vec![None, None]);
    }

    #[test]
    fn test_text_content() {
        let row = Row::new(vec![Cell::new("Ann"), Cell::with_badge("4.8 (Excellent)", "Excellent")]);
        assert_eq!(row.text_content(), "Ann 4.8 (Excellent)");
        assert!(row.visible);
    }
}
