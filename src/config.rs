use crate::error::TrackerTableError;
use crate::table::Indicator;
use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

/// Errors related to sort configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{name}': {message}")]
    InvalidValue { name: &'static str, message: String },
}

/// How the comparator decides between numeric, date and text ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Decide independently for every compared pair of rows.
    #[default]
    PerPair,
    /// Decide once per sort from every value in the column.
    PerColumn,
}

/// Class names used to render sort state on header cells.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndicatorStyle {
    /// Class added to headers that accept sort activation
    pub interactive_class: String,
    /// Header class while the column is sorted ascending
    pub ascending_class: String,
    /// Header class while the column is sorted descending
    pub descending_class: String,
    /// Icon of unsorted columns
    pub neutral_icon: String,
    /// Icon of the ascending column
    pub ascending_icon: String,
    /// Icon of the descending column
    pub descending_icon: String,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            interactive_class: "sortable-header".to_owned(),
            ascending_class: "sort-asc".to_owned(),
            descending_class: "sort-desc".to_owned(),
            neutral_icon: "fas fa-sort text-muted".to_owned(),
            ascending_icon: "fas fa-sort-up text-primary".to_owned(),
            descending_icon: "fas fa-sort-down text-primary".to_owned(),
        }
    }
}

impl IndicatorStyle {
    /// Header class for a state; neutral headers carry none.
    pub fn state_class(&self, indicator: Indicator) -> Option<&str> {
        match indicator {
            Indicator::Neutral => None,
            Indicator::Ascending => Some(&self.ascending_class),
            Indicator::Descending => Some(&self.descending_class),
        }
    }

    /// Icon class for a state.
    pub fn icon(&self, indicator: Indicator) -> &str {
        match indicator {
            Indicator::Neutral => &self.neutral_icon,
            Indicator::Ascending => &self.ascending_icon,
            Indicator::Descending => &self.descending_icon,
        }
    }
}

/// Options controlling which columns sort and how values compare.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Header label fragments (case-insensitive) that make a column unsortable
    pub non_sortable_keywords: Vec<String>,

    /// Header class that makes a column unsortable
    pub no_sort_class: String,

    /// Recognize `MM/DD/YYYY`, `YYYY-MM-DD` and `Month DD, YYYY` values as dates.
    pub detect_dates: bool,

    /// Where the numeric/date/text decision is made.
    pub classification: Classification,

    /// Header rendering
    pub indicator: IndicatorStyle,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            non_sortable_keywords: vec!["action".to_owned()],
            no_sort_class: "no-sort".to_owned(),
            detect_dates: true,
            classification: Classification::PerPair,
            indicator: IndicatorStyle::default(),
        }
    }
}

impl SortConfig {
    /// Reads a configuration from JSON; omitted fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, TrackerTableError> {
        let config: Self =
            serde_json::from_str(text).context("Failed to parse sort configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that no class name or keyword is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self
            .non_sortable_keywords
            .iter()
            .position(|keyword| keyword.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                name: "non_sortable_keywords",
                message: format!("keyword at {index} is blank"),
            });
        }
        let classes = [
            ("no_sort_class", &self.no_sort_class),
            ("indicator.interactive_class", &self.indicator.interactive_class),
            ("indicator.ascending_class", &self.indicator.ascending_class),
            ("indicator.descending_class", &self.indicator.descending_class),
        ];
        for (name, class) in classes {
            if class.trim().is_empty() || class.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidValue {
                    name,
                    message: format!("'{class}' is not a single class name"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SortConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = SortConfig::from_json(
            r#"{ "classification": "per-column", "indicator": { "ascending_class": "asc" } }"#,
        )
        .unwrap();
        assert_eq!(config.classification, Classification::PerColumn);
        assert_eq!(config.indicator.ascending_class, "asc");
        assert_eq!(config.indicator.descending_class, "sort-desc");
        assert_eq!(config.non_sortable_keywords, vec!["action".to_owned()]);
        assert!(config.detect_dates);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let error = SortConfig::from_json("{ not json").unwrap_err();
        assert!(error.to_string().contains("Failed to parse sort configuration"));
    }

    #[test]
    fn test_from_json_rejects_blank_class() {
        let error = SortConfig::from_json(r#"{ "no_sort_class": "no sort" }"#).unwrap_err();
        assert!(matches!(error, TrackerTableError::ConfigError(_)));
    }

    #[test]
    fn test_indicator_style() {
        let style = IndicatorStyle::default();
        assert_eq!(style.state_class(Indicator::Neutral), None);
        assert_eq!(style.state_class(Indicator::Descending), Some("sort-desc"));
        assert_eq!(style.icon(Indicator::Ascending), "fas fa-sort-up text-primary");
    }
}
