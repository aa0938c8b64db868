use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ScoreResult;

pub fn print_summary(result: &ScoreResult) {
    println!("Results: {}", result.input.display());
    if let Some(header) = &result.header {
        println!("{}", header_line(header));
    }
    if let Some(outputs) = &result.outputs {
        println!("Results CSV: {}", outputs.results.display());
        println!("Team scores CSV: {}", outputs.team_scores.display());
    }
    if result.moved > 0 {
        println!("Manual moves applied: {}", result.moved);
    }
    println!("{}", render(&result.tables.results, &[0]));
    println!("{}", render(&result.tables.team_scores, &[0, 2]));
    print_rejected(result);
}

fn header_line(header: &[String]) -> String {
    format!("Header row: {}", header.join(", "))
}

fn print_rejected(result: &ScoreResult) {
    if result.rejected.is_empty() && result.meet.skipped().is_empty() {
        return;
    }
    eprintln!("Not scored:");
    for row in &result.rejected {
        eprintln!("- line {}: {}", row.line, row.error);
    }
    for skipped in result.meet.skipped() {
        eprintln!("- {}: {}", skipped.record.name, skipped.error);
    }
}

/// Renders a report table, right-aligning the numeric columns.
fn render(source: &xc_report::Table, numeric: &[usize]) -> Table {
    let mut table = Table::new();
    table.set_header(source.headers.iter().map(|label| header_cell(label)));
    apply_table_style(&mut table);
    for row in &source.rows {
        table.add_row(row);
    }
    for &index in numeric {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
