//! Terminal rendering of command outcomes with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use recon_model::{FieldStatus, MatchStatus};

use crate::commands::{
    CommonOutcome, CompareOutcome, DatesOutcome, DeltaOutcome, ReconcileOutcome,
};

const PREVIEW_ROWS: usize = 15;

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn status_cell(ok: bool, text: &str) -> Cell {
    let color = if ok { Color::Green } else { Color::Red };
    Cell::new(text).fg(color)
}

pub fn print_comparison(outcome: &CompareOutcome) {
    let comparison = &outcome.comparison;
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("ID"),
        header_cell(&format!("{} (Sistema)", comparison.left_column)),
        header_cell(&format!("{} (B3)", comparison.right_column)),
        header_cell("Status"),
    ]);
    for row in comparison.rows.iter().take(PREVIEW_ROWS) {
        table.add_row(vec![
            Cell::new(row.index).set_alignment(CellAlignment::Right),
            Cell::new(row.left.as_deref().unwrap_or("")),
            Cell::new(row.right.as_deref().unwrap_or("")),
            status_cell(row.status == MatchStatus::Equal, &row.status.to_string()),
        ]);
    }
    println!("{table}");
    if comparison.rows.len() > PREVIEW_ROWS {
        println!("... {} more rows", comparison.rows.len() - PREVIEW_ROWS);
    }
    println!(
        "Equal: {}  Different: {}  Total: {}",
        comparison.stats.equal, comparison.stats.different, comparison.stats.total
    );
    println!("\n{}", outcome.report);
}

pub fn print_common(outcome: &CommonOutcome) {
    println!("Common columns: {}", outcome.columns.len());
    for column in &outcome.columns {
        println!("- {column}");
    }
    for comparison in &outcome.comparisons {
        println!();
        print_comparison(comparison);
    }
}

pub fn print_delta(outcome: &DeltaOutcome) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Total"),
        header_cell("Positive"),
        header_cell("Negative"),
    ]);
    for side in [&outcome.comparison.left, &outcome.comparison.right] {
        table.add_row(vec![
            Cell::new(&side.label),
            Cell::new(side.stats.rows).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", side.stats.total)).set_alignment(CellAlignment::Right),
            Cell::new(side.stats.positive).set_alignment(CellAlignment::Right),
            Cell::new(side.stats.negative).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
    println!("\n{}", outcome.report);
}

pub fn print_dates(outcome: &DatesOutcome) {
    let analysis = &outcome.analysis;
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Data_Sistema"),
        header_cell("Data_B3"),
        header_cell("Status"),
    ]);
    for row in analysis.rows.iter().take(PREVIEW_ROWS) {
        let status = row.status.describe("Sistema", "B3");
        table.add_row(vec![
            Cell::new(row.index).set_alignment(CellAlignment::Right),
            Cell::new(row.left.as_deref().unwrap_or("")),
            Cell::new(row.right.as_deref().unwrap_or("")),
            status_cell(row.status.is_ok(), &status),
        ]);
    }
    println!("{table}");
    println!(
        "Rows with problems: {} of {}",
        analysis.problems,
        analysis.rows.len()
    );
}

pub fn print_reconcile(outcome: &ReconcileOutcome) {
    let reconciliation = &outcome.reconciliation;
    if reconciliation.is_empty_comparison() {
        println!("No shared fields besides the key; only presence was reconciled.");
    }
    let mut table = styled_table();
    table.set_header(vec![
        header_cell(&reconciliation.key_column),
        header_cell("Status"),
        header_cell("Divergent fields"),
    ]);
    for row in reconciliation.rows.iter().take(PREVIEW_ROWS) {
        let divergent: Vec<&str> = row
            .fields
            .iter()
            .filter(|field| field.status == FieldStatus::Divergent)
            .map(|field| field.name.as_str())
            .collect();
        table.add_row(vec![
            Cell::new(&row.key),
            status_cell(row.status == FieldStatus::Ok, &row.status.to_string()),
            Cell::new(divergent.join(", ")),
        ]);
    }
    println!("{table}");
    if reconciliation.rows.len() > PREVIEW_ROWS {
        println!(
            "... {} more rows",
            reconciliation.rows.len() - PREVIEW_ROWS
        );
    }
    println!("\n{}", outcome.report);
}
