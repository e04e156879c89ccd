use crate::table::Indicator;
use std::cmp::Ordering;

/// Sort direction of the active column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> Indicator {
        match self {
            Direction::Ascending => Indicator::Ascending,
            Direction::Descending => Indicator::Descending,
        }
    }
}

/// Which column a table is sorted by, kept for the lifetime of the page view.
///
/// Unsorted until the first activation; re-activating the active column flips
/// the direction, activating any other column sorts it ascending.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    active_column: Option<usize>,
    direction: Direction,
}

impl SortState {
    pub fn active_column(&self) -> Option<usize> {
        self.active_column
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_unsorted(&self) -> bool {
        self.active_column.is_none()
    }

    /// Records an activation of `column` and returns the direction to sort in.
    pub fn activate(&mut self, column: usize) -> Direction {
        if self.active_column == Some(column) {
            self.direction = self.direction.flip();
        } else {
            self.active_column = Some(column);
            self.direction = Direction::Ascending;
        }
        self.direction
    }
}
