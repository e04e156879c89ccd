//! # Sort Dispatch
//!
//! Routes header activations to [`TableSorter::sort`]. The page host registers
//! each qualifying table once, then forwards every header click as a
//! [`SortCommand`]. The dispatcher owns one [`SortState`] per table, so no sort
//! state lives on the rendered elements themselves.
use crate::sorter::{SortState, TableSorter};
use crate::surface::RenderingSurface;
use crate::table::TableId;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tracing::debug;

/// Errors related to routing sort commands.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Table '{0}' is not registered")]
    UnknownTable(TableId),

    #[error("Command for table '{command}' was sent to table '{surface}'")]
    TableMismatch { command: TableId, surface: TableId },
}

/// A header activation: sort `table` by `column`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortCommand {
    pub table: TableId,
    pub column: usize,
}

impl SortCommand {
    pub fn new(table: TableId, column: usize) -> Self {
        Self { table, column }
    }
}

/// Per-table bookkeeping.
#[derive(Clone, Debug, Default)]
struct Registration {
    /// Columns whose headers accept activation
    triggers: BTreeSet<usize>,
    state: SortState,
}

/// Holds sort state for every registered table and applies sort commands.
#[derive(Debug, Default)]
pub struct SortDispatcher {
    sorter: TableSorter,
    tables: HashMap<TableId, Registration>,
}

impl SortDispatcher {
    pub fn new(sorter: TableSorter) -> Self {
        Self {
            sorter,
            tables: HashMap::new(),
        }
    }

    pub fn sorter(&self) -> &TableSorter {
        &self.sorter
    }

    /// Prepares the table's headers and records its sortable columns.
    /// A table registered again keeps its current sort state.
    pub fn register<S>(&mut self, table: &mut S) -> &BTreeSet<usize>
    where
        S: RenderingSurface + ?Sized,
    {
        let columns = self.sorter.prepare(table);
        let registration = self.tables.entry(table.table_id()).or_default();
        registration.triggers.extend(columns);
        &registration.triggers
    }

    /// Applies a command to `table`.
    ///
    /// Returns the applied row permutation, or None when the column has no sort
    /// trigger (unsortable header); ignored commands change nothing.
    pub fn dispatch<S>(
        &mut self,
        table: &mut S,
        command: &SortCommand,
    ) -> Result<Option<Vec<usize>>, DispatchError>
    where
        S: RenderingSurface + ?Sized,
    {
        let surface = table.table_id();
        if surface != command.table {
            return Err(DispatchError::TableMismatch {
                command: command.table.clone(),
                surface,
            });
        }
        let registration = self
            .tables
            .get_mut(&command.table)
            .ok_or_else(|| DispatchError::UnknownTable(command.table.clone()))?;
        if !registration.triggers.contains(&command.column) {
            debug!(table = %command.table, column = command.column, "Ignored sort on unsortable column");
            return Ok(None);
        }
        let order = self.sorter.sort(table, &mut registration.state, command.column);
        Ok(Some(order))
    }

    /// Current sort state of a registered table.
    pub fn state(&self, table: &TableId) -> Option<SortState> {
        self.tables.get(table).map(|registration| registration.state)
    }

    /// Sortable columns of a registered table.
    pub fn triggers(&self, table: &TableId) -> Option<&BTreeSet<usize>> {
        self.tables.get(table).map(|registration| &registration.triggers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorter::Direction;
    use crate::table::Table;

    fn scores() -> Table {
        Table::from_texts(
            "scores",
            ["Name", "Score", "Actions"],
            [["Cara", "7", "edit"], ["Abe", "9", "edit"], ["Bo", "8", "edit"]],
        )
    }

    fn names(table: &Table) -> Vec<&str> {
        table.column_values(0).into_iter().flatten().collect()
    }

    #[test]
    fn test_register_and_dispatch() {
        let mut dispatcher = SortDispatcher::default();
        let mut table = scores();
        let triggers = dispatcher.register(&mut table).clone();
        assert_eq!(triggers.into_iter().collect::<Vec<_>>(), vec![0, 1]);

        let command = SortCommand::new(table.id().clone(), 1);
        let order = dispatcher.dispatch(&mut table, &command).unwrap();
        assert_eq!(order, Some(vec![0, 2, 1]));
        assert_eq!(names(&table), vec!["Cara", "Bo", "Abe"]);

        let state = dispatcher.state(table.id()).unwrap();
        assert_eq!(state.active_column(), Some(1));
        assert_eq!(state.direction(), Direction::Ascending);
    }

    #[test]
    fn test_unsortable_column_is_ignored() {
        let mut dispatcher = SortDispatcher::default();
        let mut table = scores();
        dispatcher.register(&mut table);

        let command = SortCommand::new(table.id().clone(), 2);
        assert_eq!(dispatcher.dispatch(&mut table, &command).unwrap(), None);
        assert_eq!(names(&table), vec!["Cara", "Abe", "Bo"]);
        assert!(dispatcher.state(table.id()).unwrap().is_unsorted());
    }

    #[test]
    fn test_reregister_keeps_state() {
        let mut dispatcher = SortDispatcher::default();
        let mut table = scores();
        dispatcher.register(&mut table);
        let command = SortCommand::new(table.id().clone(), 0);
        dispatcher.dispatch(&mut table, &command).unwrap();

        dispatcher.register(&mut table);
        dispatcher.dispatch(&mut table, &command).unwrap();
        assert_eq!(dispatcher.state(table.id()).unwrap().direction(), Direction::Descending);
        assert_eq!(names(&table), vec!["Cara", "Bo", "Abe"]);
    }

    #[test]
    fn test_unknown_and_mismatched_tables() {
        let mut dispatcher = SortDispatcher::default();
        let mut table = scores();

        let command = SortCommand::new(table.id().clone(), 0);
        assert_eq!(
            dispatcher.dispatch(&mut table, &command),
            Err(DispatchError::UnknownTable(TableId::new("scores")))
        );

        let command = SortCommand::new(TableId::new("other"), 0);
        assert!(matches!(
            dispatcher.dispatch(&mut table, &command),
            Err(DispatchError::TableMismatch { .. })
        ));
    }
}
