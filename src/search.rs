//! Live row filtering for tables paired with a search box.
use crate::surface::RenderingSurface;
use tracing::debug;

/// Shows the rows whose text contains `term` (case-insensitive) and hides the rest.
/// An empty term shows every row. Returns the number of visible rows.
pub fn filter_rows<S>(table: &mut S, term: &str) -> usize
where
    S: RenderingSurface + ?Sized,
{
    let term = term.to_lowercase();
    let matches: Vec<bool> = table
        .rows()
        .iter()
        .map(|row| row.text_content().to_lowercase().contains(&term))
        .collect();
    for (index, &visible) in matches.iter().enumerate() {
        table.set_row_visible(index, visible);
    }
    let visible = matches.iter().filter(|&&visible| visible).count();
    debug!(table = %table.table_id(), term = %term, visible, "Filtered table rows");
    visible
}
