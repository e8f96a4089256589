mod common;

use std::fs;

use buku_core::{
    config::{ConfigManager, ReportConfig},
    core::services::{ReportService, ServiceError, TransactionService},
    errors::{ExportError, LedgerError},
    export::{CsvWorkbookWriter, ExportFormat, JsonWorkbookWriter, WorkbookSerializer},
    ledger::TransactionRecord,
    report::{LayoutMode, Workbook},
    storage::{JsonStore, TransactionStore},
};
use common::names;
use tempfile::tempdir;

fn seeded_store(path: &std::path::Path) -> JsonStore {
    let store = JsonStore::open(path).expect("open store");
    for (date, account, memo, debit, credit) in [
        ("2025-02-10", "Beban Listrik", "Bayar listrik", 500_000, 0),
        ("2025-02-10", "Kas", "Bayar listrik", 0, 500_000),
        ("2025-01-05", "Kas", "Penjualan tunai", 2_000_000, 0),
        ("2025-01-05", "Pendapatan Jasa", "Penjualan tunai", 0, 2_000_000),
    ] {
        TransactionService::add(&store, TransactionRecord::new(date, account, memo, debit, credit))
            .expect("append");
    }
    store
}

fn scenario_config() -> ReportConfig {
    ReportConfig {
        revenue_accounts: names(&["Pendapatan Jasa"]),
        expense_accounts: names(&["Beban Listrik"]),
        ..ReportConfig::default()
    }
}

#[test]
fn store_and_config_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("transactions.json");
    let store = seeded_store(&store_path);
    assert_eq!(store.len().unwrap(), 4);
    drop(store);

    let reopened = JsonStore::open(&store_path).unwrap();
    let snapshot = reopened.snapshot().unwrap();
    let first = &snapshot.transactions()[0];
    assert_eq!(first.account, "Beban Listrik");

    let manager = ConfigManager::new(dir.path().join("config.json"));
    let mut config = scenario_config();
    config.layout_mode = LayoutMode::Paged;
    manager.save(&config).unwrap();
    assert_eq!(manager.load().unwrap(), config);
}

#[test]
fn rejected_record_leaves_file_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");
    let store = seeded_store(&path);
    let before = fs::read_to_string(&path).unwrap();

    let err = TransactionService::add(&store, TransactionRecord::new("2025-13-01", "Kas", "", 1, 0))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Ledger(LedgerError::InvalidTimestamp(_))));
    let err = TransactionService::add(&store, TransactionRecord::new("2025-03-01", "  ", "", 1, 0))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Ledger(LedgerError::MissingAccount)));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(store.len().unwrap(), 4);
}

#[test]
fn json_export_reflects_sorted_snapshot() {
    let dir = tempdir().unwrap();
    let store = seeded_store(&dir.path().join("transactions.json"));
    let out = dir.path().join("report.json");
    let writer = JsonWorkbookWriter { include_grid: true };

    let workbook = ReportService::export(&store, &scenario_config(), &writer, &out).unwrap();
    assert_eq!(workbook.sheets.len(), 5);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let journal = &value["sheets"][1];
    assert_eq!(journal["name"], "Jurnal Umum");
    // title, header, then the January sale first after sorting
    assert_eq!(journal["grid"][2][2], "Kas");
    assert_eq!(journal["grid"][2][4], "2.000.000");
    let income = &value["sheets"][4]["grid"];
    assert_eq!(income[4][1], "1.500.000");
}

#[test]
fn csv_export_writes_every_sheet() {
    let dir = tempdir().unwrap();
    let store = seeded_store(&dir.path().join("transactions.json"));
    let out = dir.path().join("report");
    let format = ExportFormat::Csv;
    ReportService::export(&store, &scenario_config(), format.serializer().as_ref(), &out).unwrap();

    let mut files: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(
        files,
        [
            ".buku-export",
            "01-laporan-keuangan.csv",
            "02-jurnal-umum.csv",
            "03-buku-besar.csv",
            "04-neraca-saldo.csv",
            "05-laba-rugi.csv",
        ]
    );
    let trial = fs::read_to_string(out.join("04-neraca-saldo.csv")).unwrap();
    assert!(trial.contains("Pendapatan Jasa,-,2.000.000,(2.000.000)"));
}

#[test]
fn re_export_replaces_only_its_own_output() {
    let dir = tempdir().unwrap();
    let store = seeded_store(&dir.path().join("transactions.json"));
    let out = dir.path().join("report");
    ReportService::export(&store, &scenario_config(), &CsvWorkbookWriter, &out).unwrap();
    CsvWorkbookWriter.write(&Workbook::default(), &out).unwrap();
    assert!(!out.join("01-laporan-keuangan.csv").exists());

    let shared = dir.path().join("shared");
    fs::create_dir_all(&shared).unwrap();
    fs::write(shared.join("q3-notes.txt"), "notes").unwrap();
    let err = ReportService::export(&store, &scenario_config(), &CsvWorkbookWriter, &shared)
        .unwrap_err();
    assert!(matches!(err, ServiceError::Export(ExportError::Destination(_))));
    assert_eq!(fs::read_to_string(shared.join("q3-notes.txt")).unwrap(), "notes");
    assert_eq!(fs::read_dir(&shared).unwrap().count(), 1);
}

struct BrokenSerializer;

impl WorkbookSerializer for BrokenSerializer {
    fn write(&self, _workbook: &Workbook, _destination: &std::path::Path) -> Result<(), ExportError> {
        Err(ExportError::Destination("disk full".into()))
    }
}

#[test]
fn serializer_failure_is_fatal_and_leaves_nothing_behind() {
    let dir = tempdir().unwrap();
    let store = seeded_store(&dir.path().join("transactions.json"));
    let out = dir.path().join("report.json");

    let err = ReportService::export(&store, &scenario_config(), &BrokenSerializer, &out).unwrap_err();
    assert!(matches!(err, ServiceError::Export(ExportError::Destination(_))));
    assert!(!out.exists());

    let err = ReportService::export(
        &store,
        &scenario_config(),
        &JsonWorkbookWriter::default(),
        dir.path(),
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::Export(_)));
}
