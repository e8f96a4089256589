//! One report build: snapshot, group, aggregate, lay out, and optionally export.

use std::path::Path;

use crate::config::ReportConfig;
use crate::core::services::{LedgerService, PeriodService, ServiceResult, SummaryService};
use crate::export::WorkbookSerializer;
use crate::ledger::Transaction;
use crate::report::{LayoutEngine, ReportInput, Workbook};
use crate::storage::TransactionStore;

pub struct ReportService;

impl ReportService {
    /// Takes a single snapshot of `store` and builds every sheet from it.
    pub fn build(store: &dyn TransactionStore, config: &ReportConfig) -> ServiceResult<Workbook> {
        let mut snapshot = store.snapshot()?;
        if config.chronological {
            snapshot.sort_chronologically();
        }
        tracing::debug!(
            transactions = snapshot.len(),
            taken_at = %snapshot.taken_at(),
            "building report from snapshot"
        );
        Self::build_from_transactions(snapshot.transactions(), config)
    }

    /// Builds the workbook from transactions that have already been validated.
    ///
    /// Nothing is laid out unless every calculator succeeds.
    pub fn build_from_transactions(
        transactions: &[Transaction],
        config: &ReportConfig,
    ) -> ServiceResult<Workbook> {
        let ledger = LedgerService::build_ledger(transactions)?;
        let trial_balance = SummaryService::trial_balance(transactions, config.account_order)?;
        let income_statement = SummaryService::income_statement(
            transactions,
            &config.revenue_accounts,
            &config.expense_accounts,
        )?;
        let buckets = PeriodService::group_by_period(transactions);
        let options = config.layout_options();
        Ok(LayoutEngine::new(&options).build_report(&ReportInput {
            buckets: &buckets,
            ledger: &ledger,
            trial_balance: &trial_balance,
            income_statement: &income_statement,
        }))
    }

    /// Builds the workbook and hands it to `serializer`. Serializer errors are returned unchanged.
    pub fn export(
        store: &dyn TransactionStore,
        config: &ReportConfig,
        serializer: &dyn WorkbookSerializer,
        destination: &Path,
    ) -> ServiceResult<Workbook> {
        let workbook = Self::build(store, config)?;
        serializer.write(&workbook, destination)?;
        Ok(workbook)
    }
}
