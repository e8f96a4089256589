//! Trial balance (neraca saldo) and income statement (laba rugi) calculators.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::{checked_volume, AccountSummary, Amount, IncomeStatementResult, Transaction};

/// Row ordering for the trial balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountOrder {
    /// Order in which each account first appears in the input.
    #[default]
    FirstAppearance,
    /// Byte-wise ascending account name.
    Alphabetical,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums debit and credit per account, straight from the transactions.
    pub fn trial_balance(
        transactions: &[Transaction],
        order: AccountOrder,
    ) -> Result<Vec<AccountSummary>, LedgerError> {
        checked_volume(transactions)?;
        let mut rows: Vec<AccountSummary> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for txn in transactions {
            let slot = *slots.entry(txn.account.as_str()).or_insert_with(|| {
                rows.push(AccountSummary::new(txn.account.as_str(), 0, 0));
                rows.len() - 1
            });
            let row = &mut rows[slot];
            row.total_debit += txn.debit;
            row.total_credit += txn.credit;
        }
        for row in &mut rows {
            row.balance = row.total_debit - row.total_credit;
        }
        if order == AccountOrder::Alphabetical {
            rows.sort_by(|a, b| a.account.cmp(&b.account));
        }
        tracing::debug!(accounts = rows.len(), ?order, "computed trial balance");
        Ok(rows)
    }

    /// Revenue is measured on the **credit** side of revenue accounts and expense
    /// on the **debit** side of expense accounts. Accounts in neither set are
    /// ignored; an account listed in both sets feeds both totals.
    pub fn income_statement(
        transactions: &[Transaction],
        revenue_accounts: &BTreeSet<String>,
        expense_accounts: &BTreeSet<String>,
    ) -> Result<IncomeStatementResult, LedgerError> {
        checked_volume(transactions)?;
        let mut revenue: Amount = 0;
        let mut expense: Amount = 0;
        for txn in transactions {
            if revenue_accounts.contains(&txn.account) {
                revenue += txn.credit;
            }
            if expense_accounts.contains(&txn.account) {
                expense += txn.debit;
            }
        }
        let result = IncomeStatementResult::new(revenue, expense);
        tracing::debug!(
            revenue = result.total_revenue,
            expense = result.total_expense,
            net = result.net,
            "computed income statement"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionRecord;

    fn scenario() -> Vec<Transaction> {
        [
            ("2025-01-05", "Kas", "Penjualan tunai", 2_000_000, 0),
            ("2025-01-05", "Pendapatan Jasa", "Penjualan tunai", 0, 2_000_000),
            ("2025-02-10", "Beban Listrik", "Bayar listrik", 500_000, 0),
            ("2025-02-10", "Kas", "Bayar listrik", 0, 500_000),
        ]
        .into_iter()
        .map(|(date, account, memo, debit, credit)| {
            Transaction::from_record(TransactionRecord::new(date, account, memo, debit, credit))
                .unwrap()
        })
        .collect()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn trial_balance_matches_scenario() {
        let rows = SummaryService::trial_balance(&scenario(), AccountOrder::FirstAppearance).unwrap();
        assert_eq!(
            rows,
            vec![
                AccountSummary::new("Kas", 2_000_000, 500_000),
                AccountSummary::new("Pendapatan Jasa", 0, 2_000_000),
                AccountSummary::new("Beban Listrik", 500_000, 0),
            ]
        );
        assert_eq!(rows[1].balance, -2_000_000);
    }

    #[test]
    fn alphabetical_order_is_opt_in() {
        let rows = SummaryService::trial_balance(&scenario(), AccountOrder::Alphabetical).unwrap();
        let names: Vec<&str> = rows.iter().map(|row| row.account.as_str()).collect();
        assert_eq!(names, ["Beban Listrik", "Kas", "Pendapatan Jasa"]);
    }

    #[test]
    fn trial_balance_totals_cross_check() {
        let txns = scenario();
        let rows = SummaryService::trial_balance(&txns, AccountOrder::FirstAppearance).unwrap();
        let debit: Amount = txns.iter().map(|t| t.debit).sum();
        let credit: Amount = txns.iter().map(|t| t.credit).sum();
        assert_eq!(rows.iter().map(|r| r.total_debit).sum::<Amount>(), debit);
        assert_eq!(rows.iter().map(|r| r.total_credit).sum::<Amount>(), credit);
    }

    #[test]
    fn income_statement_matches_scenario() {
        let result = SummaryService::income_statement(
            &scenario(),
            &set(&["Pendapatan Jasa"]),
            &set(&["Beban Listrik"]),
        )
        .unwrap();
        assert_eq!(result, IncomeStatementResult::new(2_000_000, 500_000));
        assert_eq!(result.net, 1_500_000);
        assert!(!result.is_loss());
    }

    #[test]
    fn loss_is_representable_and_unclassified_accounts_are_ignored() {
        let result =
            SummaryService::income_statement(&scenario(), &set(&["Tidak Ada"]), &set(&["Beban Listrik"]))
                .unwrap();
        assert_eq!(result.total_revenue, 0);
        assert_eq!(result.net, -500_000);
        assert!(result.is_loss());
    }

    #[test]
    fn empty_input_gives_zero_results() {
        assert!(SummaryService::trial_balance(&[], AccountOrder::Alphabetical)
            .unwrap()
            .is_empty());
        assert_eq!(
            SummaryService::income_statement(&[], &set(&["A"]), &set(&["B"])).unwrap(),
            IncomeStatementResult::default()
        );
    }

    #[test]
    fn overflowing_amounts_fail_both_calculators() {
        let mut txns = scenario();
        txns[1].credit = Amount::MAX;
        assert!(matches!(
            SummaryService::trial_balance(&txns, AccountOrder::FirstAppearance),
            Err(LedgerError::AmountOverflow)
        ));
        assert!(matches!(
            SummaryService::income_statement(&txns, &set(&["Pendapatan Jasa"]), &set(&[])),
            Err(LedgerError::AmountOverflow)
        ));
    }
}
