//! Text conversion utilities for reading numbers out of rendered cell text and
//! comparing strings the way a person reads them.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;
use unicase::UniCase;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes every character except ASCII digits, `.` and `-`.
/// `"$1,200.50"` becomes `"1200.50"`, `"4.8 (Excellent)"` becomes `"4.8"`.
pub(crate) fn strip_to_numeric(value: &str) -> String {
    value
        .chars()
        .filter(|char| char.is_ascii_digit() || *char == '.' || *char == '-')
        .collect()
}

/// Parses the numeric residue of a cell value.
/// The whole stripped string must be a number, so `"2023-01-15"` is rejected
/// while `"$-45"` is accepted.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    let stripped = strip_to_numeric(value);
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Parses the longest leading float literal, ignoring leading whitespace and
/// any trailing garbage (`" 4.25 stars"` gives `4.25`).
pub(crate) fn parse_leading_float(value: &str) -> Option<f64> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("Hardcode regex pattern")
    });
    let value = value.trim_start();
    let literal = pattern.find(value)?.as_str();
    literal.parse::<f64>().ok()
}

/// Splits text into alternating runs of ASCII digits and everything else.
fn chunks(value: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = value;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, char)| char.is_ascii_digit() != digits)
            .map(|(index, _)| index)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

fn is_digits(chunk: &str) -> bool {
    chunk.bytes().all(|byte| byte.is_ascii_digit())
}

/// Compares two digit runs by magnitude without overflowing on long runs.
fn compare_digits(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// Strips accents: `"Ángel"` becomes `"Angel"`.
fn base_letters(value: &str) -> String {
    value.nfd().filter(|char| !is_combining_mark(*char)).collect()
}

/// Compares strings the way a collator with numeric ordering does, so
/// `"Item 2"` sorts before `"Item 10"` and `"Ángel"` before `"Bob"`.
///
/// Base letters decide first, ignoring case and accents. Among equal base
/// letters unaccented text comes first, then lowercase before uppercase.
pub(crate) fn natural_cmp(left: &str, right: &str) -> Ordering {
    compare_base(left, right)
        .then_with(|| {
            let accents = |value: &str| value.nfd().flat_map(char::to_lowercase).collect::<Vec<_>>();
            accents(left).cmp(&accents(right))
        })
        .then_with(|| {
            let case_rank = |char: char| (char.is_uppercase(), char);
            left.nfd().map(case_rank).cmp(right.nfd().map(case_rank))
        })
}

/// Chunk-wise comparison: digit runs by magnitude, text runs by base letters.
fn compare_base(left: &str, right: &str) -> Ordering {
    let mut left_chunks = chunks(left);
    let mut right_chunks = chunks(right);
    loop {
        let ordering = match (left_chunks.next(), right_chunks.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if is_digits(l) && is_digits(r) => compare_digits(l, r),
            (Some(l), Some(r)) => UniCase::new(base_letters(l)).cmp(&UniCase::new(base_letters(r))),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_to_numeric() {
        assert_eq!(strip_to_numeric("$1,200"), "1200");
        assert_eq!(strip_to_numeric("4.8 (Excellent)"), "4.8");
        assert_eq!(strip_to_numeric("Item 10"), "10");
        assert_eq!(strip_to_numeric("2023-01-15"), "2023-01-15");
        assert_eq!(strip_to_numeric("N/A"), "");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("$45"), Some(45.0));
        assert_eq!(parse_number("-12.5%"), Some(-12.5));
        assert_eq!(parse_number("Excellent"), None);
        assert_eq!(parse_number("2023-01-15"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("1.2.3"), None);
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("4.25"), Some(4.25));
        assert_eq!(parse_leading_float("  3.7 stars"), Some(3.7));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("-2e2x"), Some(-200.0));
        assert_eq!(parse_leading_float("stars 3"), None);
        assert_eq!(parse_leading_float(""), None);
    }

    #[test]
    fn test_chunks() {
        let parts: Vec<&str> = chunks("Item 10b2").collect();
        assert_eq!(parts, vec!["Item ", "10", "b", "2"]);
        assert_eq!(chunks("").count(), 0);
    }

    #[test]
    fn test_natural_cmp_numbers() {
        assert_eq!(natural_cmp("Item 2", "Item 10"), Ordering::Less);
        assert_eq!(natural_cmp("Item 10", "Item 1"), Ordering::Greater);
        assert_eq!(natural_cmp("v1.10", "v1.9"), Ordering::Greater);
        assert_eq!(
            natural_cmp("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_natural_cmp_case() {
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("Cherry", "banana"), Ordering::Greater);
        assert_eq!(natural_cmp("a", "A"), Ordering::Less);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_accents() {
        assert_eq!(base_letters("Ángel Émile"), "Angel Emile");
        assert_eq!(natural_cmp("Ángel", "Bob"), Ordering::Less);
        assert_eq!(natural_cmp("Ana", "Ángel"), Ordering::Less);
        assert_eq!(natural_cmp("émile", "Eve"), Ordering::Less);
        assert_eq!(natural_cmp("e", "é"), Ordering::Less);
        assert_eq!(natural_cmp("émile", "Émile"), Ordering::Less);
        assert_eq!(natural_cmp("Zoe", "Émile"), Ordering::Greater);

        let mut names = vec!["Zoe", "Émile", "Eve", "émile", "Ana", "Ángel", "Bob"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["Ana", "Ángel", "Bob", "émile", "Émile", "Eve", "Zoe"]);
    }

    #[test]
    fn test_natural_cmp_prefix() {
        assert_eq!(natural_cmp("Item", "Item 1"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }
}
