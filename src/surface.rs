//! # Rendering Surface
//!
//! The contract the sorting layer consumes from whatever renders the table.
//! A browser host implements it over DOM elements; [`Table`] implements it in memory.
use crate::config::IndicatorStyle;
use crate::table::{ColumnHeader, Indicator, Row, Table, TableId};

/// Read and write access to a rendered table.
///
/// Rows are addressed by their current position, columns by zero-based index.
pub trait RenderingSurface {
    /// Identity of the table on the page.
    fn table_id(&self) -> TableId;

    /// Header cells in column order.
    fn headers(&self) -> Vec<ColumnHeader>;

    /// Body rows in current order, with their cells in column order.
    fn rows(&self) -> Vec<Row>;

    /// Moves rows so that position `i` holds the row previously at `order[i]`.
    fn reorder_rows(&mut self, order: &[usize]);

    /// Gives a header the pointer affordance and tags it with `class`.
    fn mark_interactive(&mut self, column: usize, class: &str);

    /// Returns true if the header already carries a sort indicator element.
    fn has_indicator(&self, column: usize) -> bool;

    /// Appends a sort indicator element showing `icon_class`.
    fn attach_indicator(&mut self, column: usize, icon_class: &str);

    /// Puts the header into `indicator` state as rendered by `style`: swaps the
    /// ascending/descending class and, when an indicator element exists, its icon.
    fn set_indicator(&mut self, column: usize, indicator: Indicator, style: &IndicatorStyle);

    /// Shows or hides a body row.
    fn set_row_visible(&mut self, row: usize, visible: bool);
}

impl RenderingSurface for Table {
    fn table_id(&self) -> TableId {
        self.id.clone()
    }

    fn headers(&self) -> Vec<ColumnHeader> {
        self.headers.clone()
    }

    fn rows(&self) -> Vec<Row> {
        self.rows.clone()
    }

    fn reorder_rows(&mut self, order: &[usize]) {
        let mut slots: Vec<Option<Row>> = self.rows.drain(..).map(Some).collect();
        let mut reordered: Vec<Row> = order
            .iter()
            .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
            .collect();
        // rows missing from `order` keep their relative order at the end
        reordered.extend(slots.into_iter().flatten());
        self.rows = reordered;
    }

    fn mark_interactive(&mut self, column: usize, class: &str) {
        if let Some(header) = self.headers.get_mut(column) {
            header.interactive = true;
            header.add_class(class);
        }
    }

    fn has_indicator(&self, column: usize) -> bool {
        self.headers
            .get(column)
            .map(|header| header.indicator.is_some())
            .unwrap_or(false)
    }

    fn attach_indicator(&mut self, column: usize, icon_class: &str) {
        if let Some(header) = self.headers.get_mut(column) {
            header.indicator = Some(icon_class.to_owned());
        }
    }

    fn set_indicator(&mut self, column: usize, indicator: Indicator, style: &IndicatorStyle) {
        let Some(header) = self.headers.get_mut(column) else {
            return;
        };
        header.remove_class(&style.ascending_class);
        header.remove_class(&style.descending_class);
        if let Some(class) = style.state_class(indicator) {
            header.add_class(class);
        }
        if let Some(icon) = header.indicator.as_mut() {
            *icon = style.icon(indicator).to_owned();
        }
    }

    fn set_row_visible(&mut self, row: usize, visible: bool) {
        if let Some(row) = self.rows.get_mut(row) {
            row.visible = visible;
        }
    }
}
