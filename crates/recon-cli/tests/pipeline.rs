//! End-to-end command pipelines over real CSV files.

use std::fs;
use std::path::PathBuf;

use recon_cli::cli::{
    CommonArgs, CompareArgs, DatesArgs, DeltaArgs, InputArgs, ReconcileArgs, StatusFilterArg,
};
use recon_cli::commands::{run_common, run_compare, run_dates, run_delta, run_reconcile};
use recon_model::FieldStatus;

struct Fixture {
    _dir: tempfile::TempDir,
    sistema: PathBuf,
    b3: PathBuf,
    export: PathBuf,
}

fn fixture(sistema_csv: &str, b3_csv: &str) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let sistema = dir.path().join("sistema.csv");
    let b3 = dir.path().join("b3.csv");
    let export = dir.path().join("export.csv");
    fs::write(&sistema, sistema_csv).unwrap();
    fs::write(&b3, b3_csv).unwrap();
    Fixture {
        _dir: dir,
        sistema,
        b3,
        export,
    }
}

fn input(fixture: &Fixture) -> InputArgs {
    InputArgs {
        sistema: fixture.sistema.clone(),
        b3: fixture.b3.clone(),
    }
}

#[test]
fn compare_pipeline_exports_rows() {
    let fixture = fixture(
        "id,qtd\n1,10\n2,20\n3,\n4,30\n",
        "id,quantidade\n1,10\n2,25\n3,30\n",
    );
    let args = CompareArgs {
        input: input(&fixture),
        sistema_column: "qtd".to_string(),
        b3_column: "quantidade".to_string(),
        export: Some(fixture.export.clone()),
    };
    let outcome = run_compare(&args).unwrap();

    assert_eq!(outcome.comparison.stats.total, 3);
    assert_eq!(outcome.comparison.stats.equal, 2);
    assert!(outcome.report.contains("Moderate correspondence"));

    let exported = fs::read_to_string(&fixture.export).unwrap();
    assert!(exported.starts_with("ID,qtd (Sistema),quantidade (B3),Status"));
    assert_eq!(exported.lines().count(), 4);
}

#[test]
fn common_pipeline_lists_and_compares_shared_columns() {
    let fixture = fixture("id,qtd\n1,5\n", "id,qtd\n1,6\n");
    let args = CommonArgs {
        input: input(&fixture),
        compare: true,
    };
    let outcome = run_common(&args).unwrap();

    assert_eq!(outcome.columns, vec!["id", "qtd"]);
    assert_eq!(outcome.comparisons.len(), 2);
    assert_eq!(outcome.comparisons[1].comparison.stats.different, 1);
}

#[test]
fn delta_pipeline_reports_and_exports() {
    let fixture = fixture(
        "inicial,atual\n5,8\n5,3\n",
        "inicial,atual\n1,2\n",
    );
    let args = DeltaArgs {
        input: input(&fixture),
        sistema_initial: "inicial".to_string(),
        sistema_current: "atual".to_string(),
        b3_initial: "inicial".to_string(),
        b3_current: "atual".to_string(),
        export: Some(fixture.export.clone()),
    };
    let outcome = run_delta(&args).unwrap();

    assert_eq!(outcome.comparison.left.stats.total, 1.0);
    assert_eq!(outcome.comparison.left.stats.positive, 1);
    assert_eq!(outcome.comparison.left.stats.negative, 1);

    let exported = fs::read_to_string(&fixture.export).unwrap();
    let lines: Vec<&str> = exported.lines().collect();
    assert_eq!(
        lines[0],
        "ID,inicial_Sistema,atual_Sistema,Diferenca_Sistema,inicial_B3,atual_B3,Diferenca_B3"
    );
    assert_eq!(lines[2], "1,5,3,-2,,,");
}

#[test]
fn dates_pipeline_flags_non_business_days() {
    let fixture = fixture(
        "data\n2024-03-11\n2024-03-09\n",
        "data\n2024-03-11\n2024-03-11\n",
    );
    let args = DatesArgs {
        input: input(&fixture),
        sistema_column: "data".to_string(),
        b3_column: "data".to_string(),
        export: Some(fixture.export.clone()),
    };
    let outcome = run_dates(&args).unwrap();

    assert_eq!(outcome.analysis.problems, 1);
    let exported = fs::read_to_string(&fixture.export).unwrap();
    assert!(exported.contains("Sistema: weekend"));
}

#[test]
fn reconcile_pipeline_normalizes_headers_and_filters() {
    // Headers differ only in case and padding; the join path normalizes.
    let fixture = fixture(" ID ,X\n1,10\n", "id,x\n1,10\n2,5\n");
    let args = ReconcileArgs {
        input: input(&fixture),
        key: "Id".to_string(),
        status_filter: Some(StatusFilterArg::Divergente),
        export: Some(fixture.export.clone()),
    };
    let outcome = run_reconcile(&args).unwrap();

    assert_eq!(outcome.reconciliation.stats.rows, 2);
    assert_eq!(outcome.reconciliation.stats.ok, 1);
    assert_eq!(outcome.reconciliation.stats.divergent, 1);
    let divergent = outcome
        .reconciliation
        .rows
        .iter()
        .find(|row| row.status == FieldStatus::Divergent)
        .unwrap();
    assert_eq!(divergent.key, "2");

    let exported = fs::read_to_string(&fixture.export).unwrap();
    let lines: Vec<&str> = exported.lines().collect();
    assert_eq!(lines[0], "id,x_sistema,x_b3,x_status,Status_Geral");
    // Only the divergent row passes the filter.
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("2,"));
}

#[test]
fn unknown_column_surfaces_as_single_failure() {
    let fixture = fixture("qtd\n1\n", "qtd\n1\n");
    let args = CompareArgs {
        input: input(&fixture),
        sistema_column: "missing".to_string(),
        b3_column: "qtd".to_string(),
        export: None,
    };
    let error = run_compare(&args).unwrap_err();
    assert!(format!("{error:#}").contains("missing"));
}
