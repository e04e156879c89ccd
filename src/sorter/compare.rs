use crate::helpers::string::natural_cmp;
use crate::table::cell::SortKey;
use std::cmp::Ordering;

/// Comparison semantics chosen for a pair of values or a whole column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ValueKind {
    /// Numeric residue of the text compared as numbers
    Number,
    /// Calendar dates compared chronologically
    Date,
    /// Natural, case-insensitive text ordering
    Text,
}

impl ValueKind {
    /// Kind for one pair: numbers win over dates, dates over text.
    pub(crate) fn of_pair(left: &SortKey, right: &SortKey) -> Self {
        if left.number.is_some() && right.number.is_some() {
            ValueKind::Number
        } else if left.date.is_some() && right.date.is_some() {
            ValueKind::Date
        } else {
            ValueKind::Text
        }
    }

    /// Detects the most specific kind shared by every present value of a column.
    /// Falls back to text if kinds are inconsistent or the column is empty.
    pub(crate) fn detect<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a SortKey>,
    {
        let keys: Vec<&SortKey> = keys.into_iter().collect();
        if keys.is_empty() {
            ValueKind::Text
        } else if keys.iter().all(|key| key.number.is_some()) {
            ValueKind::Number
        } else if keys.iter().all(|key| key.date.is_some()) {
            ValueKind::Date
        } else {
            ValueKind::Text
        }
    }

    /// Ascending comparison under this kind. Values lacking the facet compare as text.
    pub(crate) fn compare(self, left: &SortKey, right: &SortKey) -> Ordering {
        match self {
            ValueKind::Number => match (left.number, right.number) {
                (Some(l), Some(r)) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
                _ => natural_cmp(&left.text, &right.text),
            },
            ValueKind::Date => match (left.date, right.date) {
                (Some(l), Some(r)) => l.cmp(&r),
                _ => natural_cmp(&left.text, &right.text),
            },
            ValueKind::Text => natural_cmp(&left.text, &right.text),
        }
    }
}

/// Ascending comparison of two cells, classifying the pair on the spot.
/// A missing cell on either side compares equal.
pub(crate) fn compare_pair(left: Option<&SortKey>, right: Option<&SortKey>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => ValueKind::of_pair(l, r).compare(l, r),
        _ => Ordering::Equal,
    }
}

/// Ascending comparison of two cells under a kind fixed for the column.
pub(crate) fn compare_as(kind: ValueKind, left: Option<&SortKey>, right: Option<&SortKey>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => kind.compare(l, r),
        _ => Ordering::Equal,
    }
}
