//! Table formatting utilities for CLI output.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use timelog::TimeEntry;

/// Format time entries as an ASCII table, one row per entry.
pub fn format_entries_table(entries: &[TimeEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Day", "Start", "Hours", "Project"]);

    for entry in entries {
        table.add_row(vec![
            entry.day.to_string(),
            format!("{}:{:0>2}", entry.start_hour, entry.start_minute),
            entry.total_hours.clone(),
            entry.project.clone(),
        ]);
    }
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}
