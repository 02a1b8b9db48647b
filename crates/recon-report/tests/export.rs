//! CSV export layout: key/index first, data fields, status/delta last.

use polars::prelude::{Column, DataFrame};
use recon_core::calendar::{HolidayCalendar, analyze_dates};
use recon_core::compare::compare_columns;
use recon_core::delta::{DeltaSelection, compare_deltas};
use recon_core::join::reconcile;
use recon_ingest::Dataset;
use recon_model::FieldStatus;
use recon_report::{
    write_comparison_csv, write_dates_csv, write_delta_csv, write_reconciliation_csv,
};

fn to_lines(buffer: Vec<u8>) -> Vec<String> {
    String::from_utf8(buffer)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn comparison_export_layout() {
    let sistema = Dataset::new(
        "Sistema",
        DataFrame::new(vec![Column::new("qtd".into(), [10i64, 20])]).unwrap(),
    );
    let b3 = Dataset::new(
        "B3",
        DataFrame::new(vec![Column::new("quantidade".into(), [10i64])]).unwrap(),
    );
    let comparison = compare_columns(&sistema, &b3, "qtd", "quantidade").unwrap();

    let mut buffer = Vec::new();
    write_comparison_csv(&mut buffer, &comparison, "Sistema", "B3").unwrap();
    let lines = to_lines(buffer);

    assert_eq!(lines[0], "ID,qtd (Sistema),quantidade (B3),Status");
    assert_eq!(lines[1], "0,10,10,Equal");
    assert_eq!(lines[2], "1,20,,Different");
}

#[test]
fn dates_export_uses_labels_in_status() {
    let sistema = Dataset::new(
        "Sistema",
        DataFrame::new(vec![Column::new("data".into(), ["2024-03-09"])]).unwrap(),
    );
    let b3 = Dataset::new(
        "B3",
        DataFrame::new(vec![Column::new("data".into(), ["2024-03-11"])]).unwrap(),
    );
    let calendar = HolidayCalendar::brazil();
    let analysis = analyze_dates(&sistema, &b3, "data", "data", &calendar).unwrap();

    let mut buffer = Vec::new();
    write_dates_csv(&mut buffer, &analysis, "Sistema", "B3").unwrap();
    let lines = to_lines(buffer);

    assert_eq!(lines[0], "ID,Data_Sistema,Data_B3,Status");
    assert_eq!(lines[1], "0,2024-03-09,2024-03-11,Sistema: weekend");
}

#[test]
fn delta_export_aligns_sides_by_row_index() {
    let sistema = Dataset::new(
        "Sistema",
        DataFrame::new(vec![
            Column::new("ini".into(), [5.0f64, 5.0]),
            Column::new("cur".into(), [8.0f64, 3.0]),
        ])
        .unwrap(),
    );
    let b3 = Dataset::new(
        "B3",
        DataFrame::new(vec![
            Column::new("ini".into(), [1.0f64]),
            Column::new("cur".into(), [2.0f64]),
        ])
        .unwrap(),
    );
    let comparison = compare_deltas(
        &sistema,
        &b3,
        &DeltaSelection::new("ini", "cur"),
        &DeltaSelection::new("ini", "cur"),
    )
    .unwrap();

    let mut buffer = Vec::new();
    write_delta_csv(&mut buffer, &comparison).unwrap();
    let lines = to_lines(buffer);

    assert_eq!(
        lines[0],
        "ID,ini_Sistema,cur_Sistema,Diferenca_Sistema,ini_B3,cur_B3,Diferenca_B3"
    );
    assert_eq!(lines[1], "0,5,8,3,1,2,1");
    // B3 has no row 1; its cells stay empty.
    assert_eq!(lines[2], "1,5,3,-2,,,");
}

#[test]
fn reconciliation_export_layout_and_filter() {
    let sistema = Dataset::new(
        "Sistema",
        DataFrame::new(vec![
            Column::new("id".into(), [1i64]),
            Column::new("x".into(), [10i64]),
        ])
        .unwrap(),
    );
    let b3 = Dataset::new(
        "B3",
        DataFrame::new(vec![
            Column::new("id".into(), [1i64, 2]),
            Column::new("x".into(), [10i64, 5]),
        ])
        .unwrap(),
    );
    let reconciliation = reconcile(&sistema, &b3, "id").unwrap();

    let mut buffer = Vec::new();
    write_reconciliation_csv(&mut buffer, &reconciliation, "Sistema", "B3", None).unwrap();
    let lines = to_lines(buffer);

    assert_eq!(lines[0], "id,x_sistema,x_b3,x_status,Status_Geral");
    assert_eq!(lines[1], "1,10,10,OK,OK");
    assert_eq!(lines[2], "2,,5,Divergente,Divergente");

    let mut buffer = Vec::new();
    write_reconciliation_csv(
        &mut buffer,
        &reconciliation,
        "Sistema",
        "B3",
        Some(FieldStatus::Divergent),
    )
    .unwrap();
    let lines = to_lines(buffer);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "2,,5,Divergente,Divergente");
}
