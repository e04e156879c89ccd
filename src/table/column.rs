/// A table header cell as seen by the sorter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Header text
    pub label: String,
    /// CSS classes currently on the header
    pub classes: Vec<String>,
    /// Whether the header shows a pointer cursor and accepts sort activation
    pub interactive: bool,
    /// Icon class of the sort indicator element, None until one is attached
    pub indicator: Option<String>,
}

impl ColumnHeader {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Builder for headers that carry extra classes, e.g. `no-sort`.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|it| it == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|it| it != class);
    }

    /// Returns true if the column may be sorted: the trimmed label is non-empty,
    /// contains none of `keywords` case-insensitively, and the header lacks `no_sort_class`.
    pub fn is_sortable(&self, keywords: &[String], no_sort_class: &str) -> bool {
        let label = self.label.trim().to_lowercase();
        !label.is_empty()
            && !keywords.iter().any(|keyword| label.contains(&keyword.to_lowercase()))
            && !self.has_class(no_sort_class)
    }
}

/// Visual sort state of a header.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Indicator {
    #[default]
    Neutral,
    Ascending,
    Descending,
}
