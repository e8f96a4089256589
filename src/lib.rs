#![doc(test(attr(deny(warnings))))]

//! Buku Core turns a flat transaction log into a general ledger, trial
//! balance, and income statement, and lays them out as periodized sheets
//! ready for spreadsheet export.
//!
//! Data flows one way: a [`storage::TransactionStore`] snapshot is grouped by
//! period, aggregated by the [`core::services`], placed by the
//! [`report::LayoutEngine`], and finally encoded by an
//! [`export::WorkbookSerializer`].

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

use std::collections::BTreeSet;
use std::sync::Once;

use crate::config::ReportConfig;
use crate::core::services::{ReportService, ServiceResult};
use crate::ledger::Transaction;
use crate::report::{LayoutMode, Workbook};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Buku Core tracing initialized.");
    });
}

/// Builds every report sheet from a transaction snapshot.
///
/// Transactions are re-validated first; a malformed one fails the whole call
/// and nothing is returned. The slice is laid out in the order given.
///
/// ```
/// use std::collections::BTreeSet;
/// use buku_core::{build_report_workbook, ledger::{Transaction, TransactionRecord}, report::LayoutMode};
///
/// let txns = vec![
///     Transaction::from_record(TransactionRecord::new("2025-01-05", "Kas", "Penjualan tunai", 2_000_000, 0)).unwrap(),
///     Transaction::from_record(TransactionRecord::new("2025-01-05", "Pendapatan Jasa", "Penjualan tunai", 0, 2_000_000)).unwrap(),
/// ];
/// let revenue: BTreeSet<String> = ["Pendapatan Jasa".to_string()].into();
/// let workbook = build_report_workbook(&txns, &revenue, &BTreeSet::new(), LayoutMode::Stacked).unwrap();
/// assert_eq!(workbook.sheets.len(), 5);
/// ```
pub fn build_report_workbook(
    transactions: &[Transaction],
    revenue_accounts: &BTreeSet<String>,
    expense_accounts: &BTreeSet<String>,
    layout_mode: LayoutMode,
) -> ServiceResult<Workbook> {
    for txn in transactions {
        txn.validate()?;
    }
    let config = ReportConfig {
        revenue_accounts: revenue_accounts.clone(),
        expense_accounts: expense_accounts.clone(),
        layout_mode,
        chronological: false,
        ..ReportConfig::default()
    };
    ReportService::build_from_transactions(transactions, &config)
}
