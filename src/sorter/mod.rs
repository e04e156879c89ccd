//! # Table Sorting
//!
//! Click-to-sort behaviour for rendered tables. [`TableSorter::prepare`] decorates
//! the sortable headers once, [`TableSorter::sort`] reorders the body rows by one
//! column and keeps the header indicators in step with the table's [`SortState`].
//!
//! Values are compared as numbers when both strip down to a number, as dates when
//! both look like `MM/DD/YYYY`, `YYYY-MM-DD` or `Month DD, YYYY`, and otherwise as
//! text with embedded numbers read by magnitude. With the default
//! [`Classification::PerPair`] that choice is made for every compared pair, so
//! mixed columns may not form a total order; the merge sort underneath still
//! returns a permutation for them.
use crate::config::{Classification, SortConfig};
use crate::helpers::order::stable_order_by;
use crate::surface::RenderingSurface;
use crate::table::cell::SortKey;
use crate::table::{ColumnHeader, Indicator};
use tracing::debug;

pub(crate) mod compare;
pub(crate) mod state;

use compare::{compare_as, compare_pair, ValueKind};
pub use state::{Direction, SortState};

/// Sorts tables by column according to a [`SortConfig`].
#[derive(Clone, Debug, Default)]
pub struct TableSorter {
    config: SortConfig,
}

impl TableSorter {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Returns true if the header may trigger a sort under this configuration.
    pub fn is_sortable(&self, header: &ColumnHeader) -> bool {
        header.is_sortable(&self.config.non_sortable_keywords, &self.config.no_sort_class)
    }

    /// Decorates every sortable header: pointer affordance, interactive class and a
    /// neutral indicator when none is attached yet.
    ///
    /// Returns the indices of the sortable columns. Calling it again on the same
    /// table leaves the headers as they are.
    pub fn prepare<S>(&self, table: &mut S) -> Vec<usize>
    where
        S: RenderingSurface + ?Sized,
    {
        let style = &self.config.indicator;
        let sortable: Vec<usize> = table
            .headers()
            .iter()
            .enumerate()
            .filter(|(_, header)| self.is_sortable(header))
            .map(|(index, _)| index)
            .collect();

        for &column in &sortable {
            table.mark_interactive(column, &style.interactive_class);
            if !table.has_indicator(column) {
                table.attach_indicator(column, style.icon(Indicator::Neutral));
            }
        }

        debug!(table = %table.table_id(), columns = ?sortable, "Prepared sortable headers");
        sortable
    }

    /// Sorts the body rows by `column`, toggling the direction when the column is
    /// already active, and updates every header indicator.
    ///
    /// `column` is expected to be one of the indices [`prepare`](Self::prepare)
    /// returned. Rows lacking a cell at `column` compare equal to everything.
    /// Returns the applied permutation: position `i` now holds the row that was at
    /// `order[i]`.
    pub fn sort<S>(&self, table: &mut S, state: &mut SortState, column: usize) -> Vec<usize>
    where
        S: RenderingSurface + ?Sized,
    {
        let direction = state.activate(column);
        self.update_indicators(table, column, direction);

        let detect_dates = self.config.detect_dates;
        let keys: Vec<Option<SortKey>> = table
            .rows()
            .iter()
            .map(|row| row.cells.get(column).map(|cell| SortKey::new(cell, detect_dates)))
            .collect();

        let order = match self.config.classification {
            Classification::PerPair => stable_order_by(keys.len(), |a, b| {
                direction.apply(compare_pair(keys[a].as_ref(), keys[b].as_ref()))
            }),
            Classification::PerColumn => {
                let kind = ValueKind::detect(keys.iter().flatten());
                stable_order_by(keys.len(), |a, b| {
                    direction.apply(compare_as(kind, keys[a].as_ref(), keys[b].as_ref()))
                })
            }
        };
        table.reorder_rows(&order);

        debug!(
            table = %table.table_id(),
            column,
            direction = ?direction,
            rows = order.len(),
            "Sorted table"
        );
        order
    }

    /// Resets every header to neutral, then marks `column` with `direction`.
    fn update_indicators<S>(&self, table: &mut S, column: usize, direction: Direction)
    where
        S: RenderingSurface + ?Sized,
    {
        let style = &self.config.indicator;
        for index in 0..table.headers().len() {
            table.set_indicator(index, Indicator::Neutral, style);
        }
        table.set_indicator(column, direction.indicator(), style);
    }
}
