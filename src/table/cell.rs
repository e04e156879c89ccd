use crate::helpers::string::parse_number;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// A single rendered table cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Full display text of the cell
    pub text: String,
    /// Text of a nested badge element, compared instead of `text` when present
    pub badge: Option<String>,
}

impl Cell {
    /// Creates a plain text cell.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badge: None,
        }
    }

    /// Creates a cell whose comparison value comes from its badge.
    pub fn with_badge(text: impl Into<String>, badge: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badge: Some(badge.into()),
        }
    }

    /// Returns the value used for ordering: trimmed badge text, else trimmed display text.
    pub fn sort_value(&self) -> &str {
        match &self.badge {
            Some(badge) => badge.trim(),
            None => self.text.trim(),
        }
    }
}

/// Date shapes recognized in cell text, paired with the chrono format that reads them.
fn date_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        vec![
            // MM/DD/YYYY
            (Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("Hardcode regex pattern"), "%m/%d/%Y"),
            // YYYY-MM-DD
            (Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Hardcode regex pattern"), "%Y-%m-%d"),
            // Month DD, YYYY (short or full month name)
            (Regex::new(r"^[A-Za-z]{3,9}\s+\d{1,2},\s+\d{4}$").expect("Hardcode regex pattern"), "%B %d, %Y"),
        ]
    })
}

/// Parses a value shaped like one of the recognized date patterns.
/// Returns None for other shapes and for impossible dates such as `02/30/2023`.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let (_, format) = date_patterns().iter().find(|(pattern, _)| pattern.is_match(value))?;
    let normalized = value.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDate::parse_from_str(&normalized, format).ok()
}

/// Comparison facets of one cell value, computed once per sort.
///
/// Whether a pair compares numerically, chronologically or textually is still
/// decided per pair from these facets.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SortKey {
    pub(crate) text: String,
    pub(crate) number: Option<f64>,
    pub(crate) date: Option<NaiveDate>,
}

impl SortKey {
    pub(crate) fn new(cell: &Cell, detect_dates: bool) -> Self {
        let text = cell.sort_value().to_owned();
        let number = parse_number(&text);
        let date = if detect_dates { parse_date(&text) } else { None };
        Self { text, number, date }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_value_prefers_badge() {
        let cell = Cell::with_badge("4.8 (Excellent)", " Excellent ");
        assert_eq!(cell.sort_value(), "Excellent");
        assert_eq!(Cell::new("  42  ").sort_value(), "42");
    }

    #[test]
    fn test_parse_date_shapes() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 15);
        assert_eq!(parse_date("01/15/2023"), expected);
        assert_eq!(parse_date("1/15/2023"), expected);
        assert_eq!(parse_date("2023-01-15"), expected);
        assert_eq!(parse_date("Jan 15, 2023"), expected);
        assert_eq!(parse_date("January  15,   2023"), expected);
    }

    #[test]
    fn test_parse_date_rejects() {
        assert_eq!(parse_date("2023-1-15"), None);
        assert_eq!(parse_date("02/30/2023"), None);
        assert_eq!(parse_date("Foo 15, 2023"), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_sort_key_facets() {
        let key = SortKey::new(&Cell::new("$1,200"), true);
        assert_eq!(key.number, Some(1200.0));
        assert_eq!(key.date, None);

        let key = SortKey::new(&Cell::new("2023-06-01"), true);
        assert_eq!(key.number, None);
        assert_eq!(key.date, NaiveDate::from_ymd_opt(2023, 6, 1));

        let key = SortKey::new(&Cell::new("2023-06-01"), false);
        assert_eq!(key.date, None);
    }
}
