use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use audioqc_model::Severity;

use crate::commands::RunResult;

pub fn print_summary(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Item"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for item_id in &result.item_ids {
        let errors = result
            .log
            .findings_for(item_id)
            .filter(|finding| finding.severity == Severity::Error)
            .count();
        let warnings = result
            .log
            .findings_for(item_id)
            .filter(|finding| finding.severity == Severity::Warning)
            .count();
        table.add_row(vec![
            Cell::new(item_id),
            count_cell(errors, Color::Red),
            count_cell(warnings, Color::Yellow),
        ]);
    }

    println!("{table}");
    println!(
        "{} items checked, {} errors, {} warnings",
        result.item_ids.len(),
        result.log.error_count(),
        result.log.warning_count()
    );
    if let Some(path) = &result.report_path {
        println!("Findings report: {}", path.display());
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
