use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use aqua_core::CleaningReport;
use aqua_map::MatchOrigin;

/// Writes the run summary to stderr; stdout carries only the JSON result.
pub fn print_summary(report: &CleaningReport) {
    eprintln!("{}", counts_table(report));
    if !report.mapping.is_empty() {
        eprintln!("{}", mapping_table(report));
    }
    if !report.mapping.unmapped_columns.is_empty() {
        eprintln!("Unmapped columns: {}", report.mapping.unmapped_columns.join(", "));
    }
}

pub fn counts_table(report: &CleaningReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let kind = report
        .kind
        .map_or_else(|| "-".to_string(), |kind| kind.to_string());
    let rows = [
        ("Rows read", report.input_rows),
        ("Malformed lines skipped", report.skipped_lines),
        ("Duplicate rows removed", report.duplicate_rows),
        ("Cells blanked", report.stats.total_blanked()),
        ("Event IDs regenerated", report.stats.regenerated_ids),
        ("Localities inferred", report.stats.inferred_localities),
        ("Rows dropped", report.dropped_rows),
    ];
    table.add_row(vec![Cell::new("Dataset kind"), Cell::new(kind)]);
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), count_cell(count)]);
    }
    table.add_row(vec![
        Cell::new("Records emitted")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn mapping_table(report: &CleaningReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Field"),
        header_cell("Match"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in &report.mapping.mappings {
        table.add_row(vec![
            Cell::new(&column.source_column),
            Cell::new(&column.target_field)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            origin_cell(column.origin),
            Cell::new(format!("{:.2}", column.confidence)),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn origin_cell(origin: MatchOrigin) -> Cell {
    match origin {
        MatchOrigin::Override => Cell::new("override").fg(Color::Yellow),
        MatchOrigin::Name => Cell::new("name"),
        MatchOrigin::Alias => Cell::new("alias").fg(Color::DarkGrey),
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
