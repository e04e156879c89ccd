//! Display helpers for ratings and chart palettes.
use crate::helpers::string::parse_leading_float;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors related to value formatting.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid rating '{0}'")]
    InvalidRating(String),
}

/// Hue step between consecutive palette colours (golden angle, degrees).
const GOLDEN_ANGLE: f64 = 137.508;

/// Formats a rating with one decimal place, reading the leading number of `rating`.
///
/// The exact binary value is rounded, halves away from zero: `"4.25"` becomes
/// `"4.3"` but `"0.15"`, stored just below the half, becomes `"0.1"`.
pub fn format_rating(rating: &str) -> Result<String, FormatError> {
    let value = parse_leading_float(rating)
        .filter(|value| value.is_finite())
        .ok_or_else(|| FormatError::InvalidRating(rating.to_owned()))?;
    let formatted = match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded = decimal.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.1}")
        }
        // beyond the decimal range there is no fractional digit left to round
        None => format!("{value:.1}"),
    };
    Ok(formatted)
}

/// Generates `count` well-spread chart colours as CSS `hsla()` strings.
pub fn generate_colors(count: usize) -> Vec<String> {
    (0..count)
        .map(|index| {
            let hue = (index as f64 * GOLDEN_ANGLE) % 360.0;
            format!("hsla({hue}, 70%, 50%, 0.8)")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating("4.25").unwrap(), "4.3");
        assert_eq!(format_rating("3").unwrap(), "3.0");
        assert_eq!(format_rating(" 4.86 stars").unwrap(), "4.9");
        assert_eq!(format_rating("-1.25").unwrap(), "-1.3");
    }

    #[test]
    fn test_format_rating_binary_halves() {
        assert_eq!(format_rating("0.15").unwrap(), "0.1");
        assert_eq!(format_rating("1.45").unwrap(), "1.4");
        assert_eq!(format_rating("2.675").unwrap(), "2.7");
        assert_eq!(format_rating("1e30").unwrap(), format!("{:.1}", 1e30));
    }

    #[test]
    fn test_format_rating_invalid() {
        assert_eq!(
            format_rating("n/a"),
            Err(FormatError::InvalidRating("n/a".to_owned()))
        );
    }

    #[test]
    fn test_generate_colors() {
        let colors = generate_colors(3);
        assert_eq!(
            colors,
            vec![
                "hsla(0, 70%, 50%, 0.8)",
                "hsla(137.508, 70%, 50%, 0.8)",
                "hsla(275.016, 70%, 50%, 0.8)",
            ]
        );
        assert!(generate_colors(0).is_empty());
    }

    #[test]
    fn test_generate_colors_wraps_hue() {
        let colors = generate_colors(4);
        let hue: f64 = colors[3]
            .trim_start_matches("hsla(")
            .split(',')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!((hue - 52.524).abs() < 1e-9);
    }
}
