//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table.
///
/// An empty slice still renders the header row so the columns stay visible.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
